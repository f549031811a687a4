use serde::{Deserialize, Serialize};

/// The card the request was issued for.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardClaims {
    pub id: Option<String>,
    /// Location of the server side configuration of the card
    pub card_server_configuration_api_url: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserClaims {
    pub id: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantClaims {
    pub id: Option<String>,
    pub alias: Option<String>,
}

/// Claims of the token the portal issues for the extension cards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionClaims {
    #[serde(default)]
    pub card: CardClaims,
    #[serde(default)]
    pub user: UserClaims,
    #[serde(default)]
    pub tenant: TenantClaims,
    pub exp: u64,
}
