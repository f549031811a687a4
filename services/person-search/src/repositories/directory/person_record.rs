use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// A name of a person. Fields not listed here are preserved as received.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
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

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub other: JsonMap<String, JsonValue>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// The subset of the `persons` resource used by the search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    #[serde(default)]
    pub names: Vec<NameRecord>,
    #[serde(default)]
    pub emails: Vec<EmailRecord>,
    #[serde(default)]
    pub credentials: Vec<CredentialRecord>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

impl PersonRecord {
    pub fn credential(&self, ty: &str) -> Option<&str> {
        self.credentials
            .iter()
            .find(|credential| credential.ty == ty)
            .and_then(|credential| credential.value.as_deref())
    }

    /// The preferred name, or the first name when none is marked as preferred.
    pub fn preferred_name(&self) -> Option<&NameRecord> {
        self.names
            .iter()
            .find(|name| name.preference.as_deref() == Some("preferred"))
            .or_else(|| self.names.first())
    }

    /// The primary email, or the first email when none is marked as primary.
    pub fn primary_email(&self) -> Option<&EmailRecord> {
        self.emails
            .iter()
            .find(|email| email.preference.as_deref() == Some("primary"))
            .or_else(|| self.emails.first())
    }
}
