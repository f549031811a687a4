mod card_config_error;
pub use self::card_config_error::*;
mod server_configuration;
pub use self::server_configuration::*;
mod card_config_client;
pub use self::card_config_client::*;
