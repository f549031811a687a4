use crate::{
    app_config::AppConfig,
    repositories::{card_config::CardConfigClient, directory::EthosClient},
    services::PersonSearchService,
};
use anyhow::Error as AnyError;
use ranger_infra::web::WebAppConfig;
use std::sync::Arc;

struct Inner {
    person_search: PersonSearchService<EthosClient>,
    card_config: CardConfigClient,
}

#[derive(Clone)]
pub struct AppState(Arc<Inner>);

impl AppState {
    pub fn new(config: &WebAppConfig<AppConfig>) -> Result<Self, AnyError> {
        let feature = &config.feature;

        let ethos_client = EthosClient::new(&feature.ethos)?;
        let card_config = CardConfigClient::new(&feature.card_configuration, feature.defaults.clone())?;

        Ok(Self::from_parts(PersonSearchService::new(ethos_client), card_config))
    }

    pub fn from_parts(person_search: PersonSearchService<EthosClient>, card_config: CardConfigClient) -> Self {
        Self(Arc::new(Inner {
            person_search,
            card_config,
        }))
    }

    pub fn person_search(&self) -> &PersonSearchService<EthosClient> {
        &self.0.person_search
    }

    pub fn card_config(&self) -> &CardConfigClient {
        &self.0.card_config
    }
}
