//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! human-readable or a JSON formatter writing to stderr. `RUST_LOG` takes
//! precedence over the configured filter.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Text,
    /// Structured JSON, one object per line
    Json,
}

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "application=debug,integration_maps=trace")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in each event
    #[serde(default)]
    pub with_location: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            format: LogFormat::default(),
            with_location: false,
        }
    }
}

impl TelemetryConfig {
    /// Config with the given filter and default format
    #[must_use]
    pub fn with_filter(log_filter: impl Into<String>) -> Self {
        Self {
            log_filter: log_filter.into(),
            ..Self::default()
        }
    }
}

/// Guard marking an installed subscriber; logs when the process winds down
#[derive(Debug)]
pub struct TelemetryGuard {
    format: LogFormat,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        debug!(format = ?self.format, "Telemetry shut down");
    }
}

/// Initialize logging with the given configuration
///
/// Returns a guard that should be kept alive for the duration of the
/// application.
///
/// # Errors
///
/// Returns `TelemetryError::Init` if a global subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_filter))
            .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let (json_layer, text_layer) = match config.format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(config.with_location)
                    .with_line_number(config.with_location),
            ),
            None,
        ),
        LogFormat::Text => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(config.with_location)
                    .with_line_number(config.with_location),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = ?config.format, "Telemetry initialized");
    Ok(TelemetryGuard {
        format: config.format,
    })
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// The log filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),
}
