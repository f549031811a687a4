use super::{DirectoryError, DirectorySession, PersonCriteria, PersonDirectory, PersonRecord};
use chrono::{DateTime, Duration, Utc};
use reqwest::{header, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration as StdDuration;
use tokio::sync::RwLock;
use url::Url;

const MAX_TOKEN_TTL: u64 = 24 * 60 * 60;

fn default_accept_type() -> String {
    "application/vnd.hedtech.integration.v12+json".to_string()
}

fn default_token_ttl() -> u64 {
    240
}

fn default_request_timeout() -> u64 {
    30
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthosConfig {
    pub base_url: Url,
    pub api_key: String,
    /// Media type of the `persons` representation.
    #[serde(default = "default_accept_type")]
    pub accept_type: String,
    /// Lifetime of the cached access token in seconds, shorter than the lifetime of the issued token.
    #[serde(default = "default_token_ttl")]
    pub token_ttl: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Person directory served by the Ethos integration api.
pub struct EthosClient {
    config: EthosConfig,
    client: Client,
    token: RwLock<Option<CachedToken>>,
}

impl EthosClient {
    pub fn new(config: &EthosConfig) -> Result<Self, DirectoryError> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            config: config.clone(),
            client,
            token: RwLock::new(None),
        })
    }

    fn resource_url(&self, segments: &[&str]) -> Result<Url, DirectoryError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DirectoryError::BaseUrl(self.config.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn cached_token(&self) -> Option<String> {
        let token = self.token.read().await;
        token
            .as_ref()
            .filter(|cached| cached.expires_at > Utc::now())
            .map(|cached| cached.token.clone())
    }

    async fn request_token(&self) -> Result<String, DirectoryError> {
        let url = self.resource_url(&["auth"])?;
        log::debug!("Requesting access token from {url}...");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;
        let token = Self::check_status(response).await?.text().await?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(DirectoryError::ResponseContent("empty access token".to_string()));
        }

        let ttl = Duration::seconds(self.config.token_ttl.min(MAX_TOKEN_TTL) as i64);
        *self.token.write().await = Some(CachedToken {
            token: token.clone(),
            expires_at: Utc::now() + ttl,
        });
        Ok(token)
    }

    async fn check_status(response: Response) -> Result<Response, DirectoryError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DirectoryError::Status { status, body })
        }
    }

    async fn get_json<T>(&self, session: &DirectorySession, url: Url) -> Result<T, DirectoryError>
    where
        T: DeserializeOwned,
    {
        session.record_get();
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .bearer_auth(session.token())
            .header(header::ACCEPT, &self.config.accept_type)
            .send()
            .await?;
        Self::check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(|err| DirectoryError::ResponseContent(format!("{err}")))
    }
}

impl PersonDirectory for EthosClient {
    async fn open_session(&self) -> Result<DirectorySession, DirectoryError> {
        let token = match self.cached_token().await {
            Some(token) => token,
            None => self.request_token().await?,
        };
        Ok(DirectorySession::new(token))
    }

    async fn get_person(&self, session: &DirectorySession, id: &str) -> Result<PersonRecord, DirectoryError> {
        let url = self.resource_url(&["api", "persons", id])?;
        self.get_json(session, url).await
    }

    async fn find_persons(
        &self,
        session: &DirectorySession,
        criteria: &PersonCriteria,
    ) -> Result<Vec<PersonRecord>, DirectoryError> {
        let mut url = self.resource_url(&["api", "persons"])?;
        url.query_pairs_mut()
            .append_pair("criteria", &serde_json::to_string(criteria)?);
        self.get_json(session, url).await
    }
}
