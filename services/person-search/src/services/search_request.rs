use crate::{repositories::card_config::ServerConfiguration, services::SearchFailure};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier or attribute a search can match on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchByType {
    EthosPersonId,
    ColleaguePersonId,
    BannerId,
    BannerUdcId,
    BannerUserName,
    Names,
    /// Value not known by the service, kept to report it.
    Unknown(String),
}

impl SearchByType {
    pub fn as_str(&self) -> &str {
        match self {
            SearchByType::EthosPersonId => "ethosPersonId",
            SearchByType::ColleaguePersonId => "colleaguePersonId",
            SearchByType::BannerId => "bannerId",
            SearchByType::BannerUdcId => "bannerUdcId",
            SearchByType::BannerUserName => "bannerUserName",
            SearchByType::Names => "names",
            SearchByType::Unknown(value) => value,
        }
    }
}

impl From<String> for SearchByType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ethosPersonId" => SearchByType::EthosPersonId,
            "colleaguePersonId" => SearchByType::ColleaguePersonId,
            "bannerId" => SearchByType::BannerId,
            "bannerUdcId" => SearchByType::BannerUdcId,
            "bannerUserName" => SearchByType::BannerUserName,
            "names" => SearchByType::Names,
            _ => SearchByType::Unknown(value),
        }
    }
}

impl From<SearchByType> for String {
    fn from(value: SearchByType) -> Self {
        match value {
            SearchByType::Unknown(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SearchByType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field requested in the search results. Any attribute not handled explicitly names a credential type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultAttribute {
    EthosPersonId,
    BirthDate,
    Email,
    Credential(String),
}

impl From<String> for ResultAttribute {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ethosPersonId" => ResultAttribute::EthosPersonId,
            "birthDate" => ResultAttribute::BirthDate,
            "email" => ResultAttribute::Email,
            _ => ResultAttribute::Credential(value),
        }
    }
}

impl From<ResultAttribute> for String {
    fn from(value: ResultAttribute) -> Self {
        match value {
            ResultAttribute::EthosPersonId => "ethosPersonId".to_string(),
            ResultAttribute::BirthDate => "birthDate".to_string(),
            ResultAttribute::Email => "email".to_string(),
            ResultAttribute::Credential(ty) => ty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_string: String,
    pub search_by: Vec<SearchByType>,
    pub search_role: Option<String>,
    pub erp_identifier: Option<SearchByType>,
    pub search_results_attributes: Vec<ResultAttribute>,
}

impl SearchRequest {
    /// Create the request from the card configuration.
    /// A configuration without search-by types is accepted only for an empty search.
    pub fn from_configuration(search_string: String, config: ServerConfiguration) -> Result<Self, SearchFailure> {
        let search_by = match config.search_by {
            Some(search_by) => search_by,
            None if search_string.is_empty() => Vec::new(),
            None => return Err(SearchFailure::new("No search-by types are configured")),
        };

        Ok(Self {
            search_string,
            search_by: search_by.into_iter().map(SearchByType::from).collect(),
            search_role: config.search_role,
            erp_identifier: config
                .erp_identifier
                .filter(|erp| !erp.is_empty())
                .map(SearchByType::from),
            search_results_attributes: config
                .search_results_attributes
                .unwrap_or_default()
                .into_iter()
                .map(ResultAttribute::from)
                .collect(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ranger_test::test;

    #[test]
    fn search_by_types_are_parsed() {
        let types: Vec<SearchByType> =
            serde_json::from_str(r#"["ethosPersonId", "bannerId", "names", "elevateId"]"#).unwrap();
        assert_eq!(
            types,
            vec![
                SearchByType::EthosPersonId,
                SearchByType::BannerId,
                SearchByType::Names,
                SearchByType::Unknown("elevateId".into())
            ]
        );
        assert_eq!(types[3].as_str(), "elevateId");
        assert_eq!(
            serde_json::to_string(&types).unwrap(),
            r#"["ethosPersonId","bannerId","names","elevateId"]"#
        );
    }

    #[test]
    fn unhandled_attributes_are_credentials() {
        assert_eq!(ResultAttribute::from("email".to_string()), ResultAttribute::Email);
        assert_eq!(
            ResultAttribute::from("bannerUserName".to_string()),
            ResultAttribute::Credential("bannerUserName".into())
        );
        assert_eq!(
            ResultAttribute::from("fullName".to_string()),
            ResultAttribute::Credential("fullName".into())
        );
    }

    #[test]
    fn request_is_created_from_configuration() {
        let config = ServerConfiguration {
            erp_identifier: Some("bannerId".into()),
            search_by: Some(vec!["names".into(), "bannerId".into()]),
            search_role: Some("student".into()),
            search_results_attributes: Some(vec!["email".into(), "bannerId".into()]),
        };

        let request = SearchRequest::from_configuration("smith".into(), config).unwrap();
        assert_eq!(request.search_by, vec![SearchByType::Names, SearchByType::BannerId]);
        assert_eq!(request.erp_identifier, Some(SearchByType::BannerId));
        assert_eq!(request.search_role.as_deref(), Some("student"));
        assert_eq!(
            request.search_results_attributes,
            vec![ResultAttribute::Email, ResultAttribute::Credential("bannerId".into())]
        );
    }

    #[test]
    fn missing_search_by_fails_only_for_non_empty_search() {
        let err = SearchRequest::from_configuration("smith".into(), ServerConfiguration::default()).unwrap_err();
        assert_eq!(err.error, "No search-by types are configured");

        let request = SearchRequest::from_configuration(String::new(), ServerConfiguration::default()).unwrap();
        assert!(request.search_by.is_empty());
        assert!(request.erp_identifier.is_none());
    }
}
