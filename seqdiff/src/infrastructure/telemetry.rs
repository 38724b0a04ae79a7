//! Logging setup for seqdiff.
//!
//! Mirrors the builder style used for the engine settings: pick a level and a
//! format, then install a `tracing-subscriber` registry once per process.

use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use super::config::{DiffSettings, LogFormat};

/// Builder for installing a global `tracing` subscriber.
///
/// The engine itself only emits events; binaries and test harnesses that
/// want to see them call [`TelemetryBuilder::init`] once at startup.
#[derive(Debug, Clone)]
pub struct TelemetryBuilder {
    log_level: String,
    format: LogFormat,
    span_events: bool,
}

impl Default for TelemetryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryBuilder {
    /// Creates a builder logging text at `info`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Text,
            span_events: false,
        }
    }

    /// Creates a builder from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &DiffSettings) -> Self {
        Self::new()
            .with_log_level(settings.log_level.clone())
            .with_format(settings.log_format)
    }

    /// Sets the filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Also logs when instrumented spans close, with their timings.
    #[must_use]
    pub const fn with_span_events(mut self) -> Self {
        self.span_events = true;
        self
    }

    /// Installs the subscriber as the global default.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The log level is not a valid filter directive
    /// - A global subscriber has already been installed
    pub fn init(self) -> Result<()> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.log_level)
                .with_context(|| format!("Invalid log level '{}'", self.log_level))?,
        };

        let span_events = if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let fmt_layer = match self.format {
            LogFormat::Json => fmt::layer().json().with_span_events(span_events).boxed(),
            LogFormat::Text => fmt::layer().with_span_events(span_events).boxed(),
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")
    }
}
