use thiserror::Error;
use wasm_bindgen::JsValue;

/// A type alias for results returned by the harness.
pub type Result<T, E = HarnessError> = std::result::Result<T, E>;

/// Everything that can go wrong while rendering, querying or driving a
/// component under test.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A `get_*` query matched no element.
    #[error("unable to find an element matching {query}")]
    NotFound { query: String },
    /// A `get_*` query matched more than one element.
    #[error("found {count} elements matching {query}, expected exactly one")]
    MultipleFound { query: String, count: usize },
    /// A text pattern could not be compiled.
    #[error("invalid text pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// The DOM threw while the harness was talking to it.
    #[error("DOM error: {0}")]
    Dom(String),
    /// The harness configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for HarnessError {
    fn from(value: JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "COMPONENT_TESTS_INTERACTIONS must be a positive integer, got {0:?}"
    )]
    InvalidInteractions(String),
    #[error("COMPONENT_TESTS_LOG must be a log level, got {0:?}")]
    InvalidLogLevel(String),
}
