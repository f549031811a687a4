use crate::{
    repositories::directory::{CredentialCriteria, NameCriteria, PersonCriteria, RoleCriteria},
    services::SearchByType,
};

/// A single request to the person directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CriteriaResult {
    Lookup { id: String },
    Filter { criteria: PersonCriteria },
}

pub struct CriteriaBuilder;

impl CriteriaBuilder {
    /// Build the directory request for a search-by type, `None` if the type cannot be searched by the search string.
    pub fn build(search_by: &SearchByType, search_string: &str, search_role: Option<&str>) -> Option<CriteriaResult> {
        match search_by {
            SearchByType::EthosPersonId => Some(CriteriaResult::Lookup {
                id: search_string.to_string(),
            }),
            SearchByType::ColleaguePersonId
            | SearchByType::BannerId
            | SearchByType::BannerUdcId
            | SearchByType::BannerUserName => Some(CriteriaResult::Filter {
                criteria: Self::credential_criteria(search_by.as_str(), search_string),
            }),
            SearchByType::Names => {
                Self::names_criteria(search_string, search_role).map(|criteria| CriteriaResult::Filter { criteria })
            }
            SearchByType::Unknown(_) => None,
        }
    }

    fn credential_criteria(ty: &str, search_string: &str) -> PersonCriteria {
        PersonCriteria {
            credentials: vec![CredentialCriteria {
                ty: ty.to_string(),
                value: search_string.to_string(),
            }],
            ..Default::default()
        }
    }

    fn names_criteria(search_string: &str, search_role: Option<&str>) -> Option<PersonCriteria> {
        let mut tokens = search_string.split_whitespace().map(ToString::to_string);
        let name = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(first), Some(middle), Some(last)) => NameCriteria {
                first_name: Some(first),
                middle_name: Some(middle),
                last_name: last,
            },
            (Some(first), Some(last), None) => NameCriteria {
                first_name: Some(first),
                middle_name: None,
                last_name: last,
            },
            (Some(last), None, None) => NameCriteria {
                first_name: None,
                middle_name: None,
                last_name: last,
            },
            _ => return None,
        };

        let roles = match search_role {
            Some(role) if !role.is_empty() && role != "any" => vec![RoleCriteria { role: role.to_string() }],
            _ => Vec::new(),
        };

        Some(PersonCriteria {
            names: vec![name],
            roles,
            ..Default::default()
        })
    }
}
