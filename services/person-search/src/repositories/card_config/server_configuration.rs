use ranger_infra::serde::serde_string_list;
use serde::{Deserialize, Serialize};

/// The part of the card configuration that is visible only for the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erp_identifier: Option<String>,
    #[serde(
        default,
        with = "serde_string_list::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_role: Option<String>,
    #[serde(
        default,
        with = "serde_string_list::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_results_attributes: Option<Vec<String>>,
}

impl ServerConfiguration {
    /// Fill the missing properties from the fallback.
    pub fn with_fallback(self, fallback: &ServerConfiguration) -> Self {
        Self {
            erp_identifier: self.erp_identifier.or_else(|| fallback.erp_identifier.clone()),
            search_by: self.search_by.or_else(|| fallback.search_by.clone()),
            search_role: self.search_role.or_else(|| fallback.search_role.clone()),
            search_results_attributes: self
                .search_results_attributes
                .or_else(|| fallback.search_results_attributes.clone()),
        }
    }
}
