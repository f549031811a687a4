use crate::{ClientConfiguration, LinkType, PersonNames, PersonSearchResult};
use serde::{Deserialize, Serialize};

const ID_PLACEHOLDER: &str = "{{id}}";

/// The extension hosting the page a person links to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageExtension {
    pub account_id: Option<String>,
    pub publisher: Option<String>,
    pub extension_name: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
}

/// The person passed to the linked page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPerson {
    pub person_id: String,
    pub banner_id: Option<String>,
    pub names: PersonNames,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LinkTarget {
    Page {
        route: String,
        extension: PageExtension,
        person: SelectedPerson,
    },
    Url {
        url: String,
        new_tab: bool,
    },
}

fn link_id<'a>(person: &'a PersonSearchResult, erp_identifier: Option<&str>) -> Option<&'a str> {
    match erp_identifier {
        None | Some("ethosPersonId") => Some(person.id.as_str()),
        Some(erp) => person.attribute(erp),
    }
}

fn page_route(route: &str, id: &str) -> String {
    if route.contains(ID_PLACEHOLDER) {
        route.replace(ID_PLACEHOLDER, id)
    } else if route.ends_with('/') {
        format!("{route}{id}")
    } else {
        format!("{route}/{id}")
    }
}

/// Resolve where the person links to, `None` if the link is not configured or the person has no erp identifier.
pub fn resolve_link(person: &PersonSearchResult, config: &ClientConfiguration) -> Option<LinkTarget> {
    let id = link_id(person, config.erp_identifier.as_deref())?;

    match config.link_type {
        LinkType::Page => {
            let route = config.page_route.as_deref()?;
            Some(LinkTarget::Page {
                route: page_route(route, id),
                extension: PageExtension {
                    account_id: config.page_account_id.clone(),
                    publisher: config.page_publisher.clone(),
                    extension_name: config.page_extension_name.clone(),
                    card_type: config.page_card_type.clone(),
                },
                person: SelectedPerson {
                    person_id: person.id.clone(),
                    banner_id: person.attribute("bannerId").map(ToString::to_string),
                    names: person.names.clone(),
                },
            })
        }
        LinkType::Url => {
            let url = config.link_url.as_deref()?;
            Some(LinkTarget::Url {
                url: url.replace(ID_PLACEHOLDER, id),
                new_tab: config.link_new_tab,
            })
        }
    }
}
