use serde::{Deserialize, Serialize};

pub const NAME_ATTRIBUTES: [&str; 3] = ["fullName", "firstName", "lastName"];

fn is_name_attribute(attribute: &str) -> bool {
    NAME_ATTRIBUTES.contains(&attribute)
}

fn default_search_role() -> String {
    "any".to_string()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkType {
    #[default]
    Page,
    Url,
}

/// The part of the card configuration available for the card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfiguration {
    pub erp_identifier: Option<String>,
    pub instructions_icon_name: Option<String>,
    pub instructions_message: Option<String>,
    pub instructions_message_header: Option<String>,
    #[serde(default)]
    pub link_new_tab: bool,
    #[serde(default)]
    pub link_type: LinkType,
    pub link_url: Option<String>,
    pub page_route: Option<String>,
    pub page_account_id: Option<String>,
    pub page_publisher: Option<String>,
    pub page_extension_name: Option<String>,
    pub page_card_type: Option<String>,
    #[serde(default)]
    pub search_by: Vec<String>,
    #[serde(default = "default_search_role")]
    pub search_role: String,
    #[serde(default)]
    pub search_results_attributes: Vec<String>,
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self {
            erp_identifier: None,
            instructions_icon_name: None,
            instructions_message: None,
            instructions_message_header: None,
            link_new_tab: false,
            link_type: LinkType::default(),
            link_url: None,
            page_route: None,
            page_account_id: None,
            page_publisher: None,
            page_extension_name: None,
            page_card_type: None,
            search_by: Vec::new(),
            search_role: default_search_role(),
            search_results_attributes: Vec::new(),
        }
    }
}

impl ClientConfiguration {
    /// Update the result attributes. Only one name attribute can be selected, when the new selection contains
    /// more, the name attributes of the previous selection are dropped.
    pub fn select_result_attributes(&mut self, attributes: Vec<String>) {
        let name_count = attributes.iter().filter(|a| is_name_attribute(a)).count();

        self.search_results_attributes = if name_count > 1 {
            let previous = &self.search_results_attributes;
            attributes
                .into_iter()
                .filter(|a| !(is_name_attribute(a) && previous.contains(a)))
                .collect()
        } else {
            attributes
        };
    }
}

/// The part of the card configuration available only for the search service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfiguration {
    pub erp_identifier: Option<String>,
    #[serde(default)]
    pub search_by: Vec<String>,
    #[serde(default = "default_search_role")]
    pub search_role: String,
    #[serde(default)]
    pub search_results_attributes: Vec<String>,
}

impl Default for ServerConfiguration {
    fn default() -> Self {
        Self {
            erp_identifier: None,
            search_by: Vec::new(),
            search_role: default_search_role(),
            search_results_attributes: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfiguration {
    #[serde(default)]
    pub client: ClientConfiguration,
    #[serde(default)]
    pub server: ServerConfiguration,
}

impl CardConfiguration {
    /// Create the configuration where the server part mirrors the search settings of the client part.
    pub fn from_client(client: ClientConfiguration) -> Self {
        let server = ServerConfiguration {
            erp_identifier: client.erp_identifier.clone(),
            search_by: client.search_by.clone(),
            search_role: client.search_role.clone(),
            search_results_attributes: client.search_results_attributes.clone(),
        };
        Self { client, server }
    }

    /// A card can be saved only with at least one search-by type and one result attribute.
    pub fn is_valid(&self) -> bool {
        !self.server.search_by.is_empty() && !self.server.search_results_attributes.is_empty()
    }
}
