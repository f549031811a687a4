use crate::repositories::{
    card_config::{CardConfigApiConfig, ServerConfiguration},
    directory::EthosConfig,
};
use ranger_infra::web::FeatureConfig;
use serde::{Deserialize, Serialize};

/// The application configuration
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub ethos: EthosConfig,
    pub card_configuration: CardConfigApiConfig,
    /// Used when the server configuration of the card cannot be fetched and to fill its missing properties.
    pub defaults: Option<ServerConfiguration>,
}

impl FeatureConfig for AppConfig {
    const NAME: &'static str = "personSearch";
}
