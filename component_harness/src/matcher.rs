use crate::error::Result;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// What a text query looks for.
///
/// Candidate text is normalized before matching: leading and trailing
/// whitespace is dropped and inner runs of whitespace collapse to one space.
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// The normalized text must equal this string.
    Exact(String),
    /// The normalized text must contain a match for this regex.
    Pattern(Regex),
}

impl TextMatch {
    /// Compiles a case-insensitive pattern, e.g. `TextMatch::pattern("count is 0")`
    /// matches `Count is 0`.
    pub fn pattern(source: &str) -> Result<Self> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(Self::Pattern(regex))
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = normalize(text);
        match self {
            Self::Exact(expected) => text == *expected,
            Self::Pattern(regex) => regex.is_match(&text),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(value: &str) -> Self {
        Self::Exact(normalize(value))
    }
}

impl From<String> for TextMatch {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Regex> for TextMatch {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => write!(f, "text {text:?}"),
            Self::Pattern(regex) => write!(f, "text /{}/i", regex.as_str()),
        }
    }
}

/// Trims and collapses whitespace the way rendered text is compared.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
