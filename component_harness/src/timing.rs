cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        fn now_ms() -> f64 {
            web_sys::window()
                .and_then(|window| window.performance())
                .map(|performance| performance.now())
                .unwrap_or_default()
        }
    } else {
        fn now_ms() -> f64 {
            use std::{sync::OnceLock, time::Instant};

            static ORIGIN: OnceLock<Instant> = OnceLock::new();
            ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Measures how long a scenario took, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: f64,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { started: now_ms() }
    }

    pub fn elapsed_ms(&self) -> f64 {
        now_ms() - self.started
    }
}
