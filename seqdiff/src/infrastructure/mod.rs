//! Infrastructure components (configuration and telemetry).

/// Settings loaded from defaults and the environment.
pub mod config;
/// Logging subscriber setup.
pub mod telemetry;
