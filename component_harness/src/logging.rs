use log::Level;

cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        /// Routes `log` output to the browser console and panics to
        /// `console.error`. Calling it more than once is harmless.
        pub fn init_logging(level: Level) {
            console_error_panic_hook::set_once();
            _ = console_log::init_with_level(level);
        }
    } else {
        /// Routes `log` output to stderr. Calling it more than once is
        /// harmless.
        pub fn init_logging(level: Level) {
            _ = simple_logger::SimpleLogger::new()
                .with_level(level.to_level_filter())
                .init();
        }
    }
}
