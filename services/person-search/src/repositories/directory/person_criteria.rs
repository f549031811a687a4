use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CredentialCriteria {
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleCriteria {
    pub role: String,
}

/// Filter of the `persons` resource, sent as the json encoded `criteria` query parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCriteria {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<NameCriteria>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<CredentialCriteria>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleCriteria>,
}
