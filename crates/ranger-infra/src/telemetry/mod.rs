mod telemetry_config;
pub use self::telemetry_config::*;
mod telemetry_error;
pub use self::telemetry_error::*;
mod telemetry_service;
pub use self::telemetry_service::*;
