//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer on top of the map
//! web service client, and provides configuration loading, logging setup and
//! the long-lived [`MapsSdk`] handle.

pub mod adapters;
pub mod config;
pub mod sdk;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, BookingConfig, CoordinateConfig, DeviceLocationConfig, ENV_PREFIX, MapsAppConfig,
};
pub use sdk::{MapsSdk, SdkError};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
