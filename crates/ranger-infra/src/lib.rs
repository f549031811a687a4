pub mod serde;
pub mod telemetry;
pub mod web;
