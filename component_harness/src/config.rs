use crate::error::ConfigError;
use log::Level;
use std::str::FromStr;
use typed_builder::TypedBuilder;

pub const INTERACTIONS_ENV: &str = "COMPONENT_TESTS_INTERACTIONS";
pub const LOG_LEVEL_ENV: &str = "COMPONENT_TESTS_LOG";

/// Settings shared by every suite built on the harness.
///
/// The defaults reproduce the reference scenario: five hundred interactions
/// per stress run, logging at `info`.
#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// How many interactions the stress scenarios perform.
    #[builder(default = 500)]
    pub interactions: usize,
    /// Level handed to the logger by [`crate::setup`].
    #[builder(default = Level::Info)]
    pub log_level: Level,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HarnessConfig {
    /// Reads the configuration from the environment.
    ///
    /// Browser tests have no process environment, so on `wasm` targets the
    /// variables are captured when the test binary is compiled.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(target_family = "wasm")]
        let lookup = |key: &str| match key {
            INTERACTIONS_ENV => {
                option_env!("COMPONENT_TESTS_INTERACTIONS").map(String::from)
            }
            LOG_LEVEL_ENV => {
                option_env!("COMPONENT_TESTS_LOG").map(String::from)
            }
            _ => None,
        };
        #[cfg(not(target_family = "wasm"))]
        let lookup = |key: &str| std::env::var(key).ok();

        Self::from_lookup(lookup)
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the defaults for missing keys.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let interactions = match lookup(INTERACTIONS_ENV) {
            Some(raw) => interactions_from_str(&raw)?,
            None => defaults.interactions,
        };
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(raw) => level_from_str(&raw)?,
            None => defaults.log_level,
        };
        Ok(Self {
            interactions,
            log_level,
        })
    }
}

fn interactions_from_str(input: &str) -> Result<usize, ConfigError> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidInteractions(input.to_string())),
    }
}

fn level_from_str(input: &str) -> Result<Level, ConfigError> {
    Level::from_str(input.trim())
        .map_err(|_| ConfigError::InvalidLogLevel(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_reference_scenario() {
        let config = HarnessConfig::default();
        assert_eq!(config.interactions, 500);
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = HarnessConfig::from_lookup(|key| match key {
            INTERACTIONS_ENV => Some("25".into()),
            LOG_LEVEL_ENV => Some("DEBUG".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            config,
            HarnessConfig::builder()
                .interactions(25)
                .log_level(Level::Debug)
                .build()
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            HarnessConfig::from_lookup(|key| (key == INTERACTIONS_ENV)
                .then(|| "0".to_string())),
            Err(ConfigError::InvalidInteractions("0".into()))
        );
        assert_eq!(
            HarnessConfig::from_lookup(|key| (key == INTERACTIONS_ENV)
                .then(|| "many".to_string())),
            Err(ConfigError::InvalidInteractions("many".into()))
        );
        assert_eq!(
            HarnessConfig::from_lookup(|key| (key == LOG_LEVEL_ENV)
                .then(|| "loud".to_string())),
            Err(ConfigError::InvalidLogLevel("loud".into()))
        );
    }

    #[test]
    fn from_env_reads_process_environment() {
        temp_env::with_vars(
            [
                (INTERACTIONS_ENV, Some("12")),
                (LOG_LEVEL_ENV, Some("warn")),
            ],
            || {
                let config = HarnessConfig::from_env().unwrap();
                assert_eq!(config.interactions, 12);
                assert_eq!(config.log_level, Level::Warn);
            },
        );

        temp_env::with_vars_unset([INTERACTIONS_ENV, LOG_LEVEL_ENV], || {
            assert_eq!(
                HarnessConfig::from_env().unwrap(),
                HarnessConfig::default()
            );
        });
    }
}
