//! Test harness for Leptos components.
//!
//! Suites mount a component with [`render`], find nodes through the returned
//! [`Screen`], poke them through an [`Interaction`] driver and assert on the
//! rendered text. Rendering, event dispatch and scheduling all belong to
//! Leptos and the browser; this crate only wires them together for tests.
//!
//! ```rust,ignore
//! use component_harness::prelude::*;
//!
//! let result = render(|| view! { <Counter/> })?;
//! let button = result.screen().get_by_text(TextMatch::pattern("count is 0")?)?;
//! let mut click = ElementClick::new(button);
//! interact(&mut click).await?;
//! assert_eq!(result.text(), "Count is 1");
//! ```

#![forbid(unsafe_code)]

mod config;
mod driver;
mod error;
mod logging;
mod matcher;
mod query;
mod render;
mod spy;
mod timing;

pub use config::{HarnessConfig, INTERACTIONS_ENV, LOG_LEVEL_ENV};
pub use driver::{
    interact, settle, DirectDriver, ElementClick, Interaction, SelectorClick,
};
pub use error::{ConfigError, HarnessError, Result};
pub use logging::init_logging;
pub use matcher::{normalize, TextMatch};
pub use query::{own_text, Screen};
pub use render::{render, text_of, RenderResult};
pub use spy::Spy;
pub use timing::Stopwatch;

use std::sync::OnceLock;

static CONFIG: OnceLock<HarnessConfig> = OnceLock::new();

/// Loads the configuration and installs the logger, once per test binary.
///
/// Later calls return the configuration loaded by the first one.
pub fn setup() -> Result<&'static HarnessConfig> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = HarnessConfig::from_env()?;
    init_logging(config.log_level);
    log::debug!("component harness configured: {config:?}");
    Ok(CONFIG.get_or_init(|| config))
}

pub mod prelude {
    pub use crate::{
        interact, render, settle, setup, DirectDriver, ElementClick,
        HarnessError, Interaction, RenderResult, Screen, SelectorClick, Spy,
        Stopwatch, TextMatch,
    };
}
