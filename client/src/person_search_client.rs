use crate::ClientError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::collections::BTreeMap;
use url::Url;

/// Names of a person as returned by the search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNames {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub other: JsonMap<String, JsonValue>,
}

impl PersonNames {
    pub fn get(&self, attribute: &str) -> Option<&str> {
        match attribute {
            "fullName" => self.full_name.as_deref(),
            "firstName" => self.first_name.as_deref(),
            "middleName" => self.middle_name.as_deref(),
            "lastName" => self.last_name.as_deref(),
            other => self.other.get(other).and_then(JsonValue::as_str),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSearchResult {
    pub id: String,
    #[serde(default)]
    pub names: PersonNames,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Email and the credentials keyed by their type.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, JsonValue>,
}

impl PersonSearchResult {
    pub fn attribute(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).and_then(JsonValue::as_str)
    }
}

/// Client of the person search service.
pub struct PersonSearchClient {
    service_url: Url,
    client: Client,
}

impl PersonSearchClient {
    pub fn new(service_url: Url) -> Self {
        Self::with_client(service_url, Client::new())
    }

    pub fn with_client(service_url: Url, client: Client) -> Self {
        Self { service_url, client }
    }

    fn search_url(&self, search_string: &str) -> Result<Url, ClientError> {
        let mut url = self.service_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidServiceUrl(self.service_url.to_string()))?
            .pop_if_empty()
            .push("person-search");
        url.query_pairs_mut().append_pair("searchString", search_string);
        Ok(url)
    }

    /// Search persons on behalf of the card identified by the token.
    /// When the service reports a failure, no person is returned.
    pub async fn search(&self, jwt: &str, search_string: &str) -> Result<Vec<PersonSearchResult>, ClientError> {
        let url = self.search_url(search_string)?;
        let response = self.client.get(url).bearer_auth(jwt).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("Person search received an error ({status}): {body}");
            return Ok(Vec::new());
        }

        response
            .json::<Vec<PersonSearchResult>>()
            .await
            .map_err(|err| ClientError::ResponseContent(format!("{err}")))
    }
}
