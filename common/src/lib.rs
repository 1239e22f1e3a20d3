pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{InterfaceConfig, LoggingConfig, NetUtilConfig};
pub use error::{CommonError, Result};
pub use telemetry::init_tracing;
