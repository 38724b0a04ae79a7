//! Configuration for seqdiff.
//!
//! Settings start from built-in defaults and are overridden by environment
//! variables prefixed with `SEQDIFF__`, e.g. `SEQDIFF__MAX_ELEMENTS=100000`.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Default environment prefix.
pub const ENV_PREFIX: &str = "SEQDIFF";

/// Output format of the log subscriber.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Settings for a [`Differ`](crate::Differ) and its telemetry.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DiffSettings {
    /// Largest `len_a + len_b` a differ accepts. Unset means unbounded.
    #[serde(default)]
    pub max_elements: Option<usize>,
    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            max_elements: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl DiffSettings {
    /// Loads settings from defaults and `SEQDIFF__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_env_prefix(ENV_PREFIX)
    }

    /// Loads settings from defaults and `{prefix}__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn with_env_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("log_level", default_log_level())?
            .set_default("log_format", "text")?
            .add_source(
                Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Caps the combined input length a differ accepts.
    #[must_use]
    pub const fn with_max_elements(mut self, limit: usize) -> Self {
        self.max_elements = Some(limit);
        self
    }

    /// Sets the default log filter.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Sets the log output format.
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}
