use crate::{
    repositories::directory::{NameRecord, PersonRecord},
    services::{locale_cmp, ResultAttribute, SearchByType},
};
use serde::Serialize;
use std::{cmp::Ordering, collections::BTreeMap};

/// A search result shaped by the requested attributes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedPerson {
    pub id: String,
    pub names: NameRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Credential values keyed by the credential type.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl TransformedPerson {
    pub fn new(person: &PersonRecord, attributes: &[ResultAttribute], erp_identifier: Option<&SearchByType>) -> Self {
        let mut transformed = TransformedPerson {
            id: person.id.clone(),
            names: person.preferred_name().cloned().unwrap_or_default(),
            date_of_birth: None,
            email: None,
            attributes: BTreeMap::new(),
        };

        for attribute in attributes {
            match attribute {
                ResultAttribute::EthosPersonId => {}
                ResultAttribute::BirthDate => transformed.date_of_birth = person.date_of_birth.clone(),
                ResultAttribute::Email => {
                    transformed.email = person.primary_email().and_then(|email| email.address.clone())
                }
                ResultAttribute::Credential(ty) => match person.credential(ty) {
                    Some(value) => {
                        transformed.attributes.insert(ty.clone(), value.to_string());
                    }
                    None => {
                        transformed.attributes.remove(ty);
                    }
                },
            }
        }

        // the erp identifier is required to link the result
        if let Some(erp) = erp_identifier.filter(|erp| **erp != SearchByType::EthosPersonId) {
            let key = erp.as_str();
            if !transformed.attributes.contains_key(key) {
                if let Some(value) = person.credential(key) {
                    transformed.attributes.insert(key.to_string(), value.to_string());
                }
            }
        }

        transformed
    }

    /// Order by last name then first name, a missing name is an empty string.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        locale_cmp(self.last_name(), other.last_name()).then_with(|| locale_cmp(self.first_name(), other.first_name()))
    }

    fn last_name(&self) -> &str {
        self.names.last_name.as_deref().unwrap_or_default()
    }

    fn first_name(&self) -> &str {
        self.names.first_name.as_deref().unwrap_or_default()
    }
}
