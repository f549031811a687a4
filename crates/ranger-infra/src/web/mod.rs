mod config;
pub use self::config::*;
mod service_config;
pub use self::service_config::*;
mod web_config;
pub use self::web_config::*;
mod web_app;
pub use self::web_app::*;

pub mod auth;
pub mod controllers;
pub mod extracts;
pub mod middlewares;
pub mod responses;
