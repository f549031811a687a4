use super::{CardConfigError, ServerConfiguration};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration as StdDuration;
use url::Url;

fn default_request_timeout() -> u64 {
    10
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfigApiConfig {
    /// Token of the extension used to read the server side card configuration.
    pub extension_api_token: Option<String>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Reads the server configuration of the card that issued the request.
pub struct CardConfigClient {
    client: Client,
    extension_api_token: Option<String>,
    defaults: ServerConfiguration,
}

impl CardConfigClient {
    pub fn new(config: &CardConfigApiConfig, defaults: Option<ServerConfiguration>) -> Result<Self, CardConfigError> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            extension_api_token: config.extension_api_token.clone().filter(|token| !token.is_empty()),
            defaults: defaults.unwrap_or_default(),
        })
    }

    pub async fn fetch(&self, url: Option<&str>) -> Result<ServerConfiguration, CardConfigError> {
        let url = Url::parse(url.ok_or(CardConfigError::MissingUrl)?)?;
        let token = self.extension_api_token.as_deref().ok_or(CardConfigError::MissingToken)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CardConfigError::Status { status, body });
        }

        response
            .json::<ServerConfiguration>()
            .await
            .map_err(|err| CardConfigError::ResponseContent(format!("{err}")))
    }

    /// Get the configuration of the card completed by the configured defaults.
    /// If the configuration cannot be fetched, the defaults are used.
    pub async fn load(&self, url: Option<&str>) -> ServerConfiguration {
        match self.fetch(url).await {
            Ok(config) => {
                log::debug!("Card server configuration: {config:?}");
                config.with_fallback(&self.defaults)
            }
            Err(err) => {
                log::error!("Unable to fetch card server configuration, using defaults: {err}");
                self.defaults.clone()
            }
        }
    }
}
