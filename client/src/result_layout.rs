use crate::{card_configuration::NAME_ATTRIBUTES, PersonSearchResult};

/// The display order of the result attributes.
pub const ORDERED_RESULT_ATTRIBUTES: [&str; 10] = [
    "fullName",
    "firstName",
    "lastName",
    "ethosPersonId",
    "bannerId",
    "colleaguePersonId",
    "bannerUdcId",
    "bannerUserName",
    "birthDate",
    "email",
];

/// How the selected result attributes of a person are presented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultLayout {
    /// The name field shown as the title of a person.
    pub name_attribute: Option<&'static str>,
    /// The other attributes in display order.
    pub attributes: Vec<&'static str>,
}

impl ResultLayout {
    pub fn new(selected: &[String]) -> Self {
        let mut layout = ResultLayout::default();
        if selected.is_empty() || (selected.len() == 1 && selected[0].is_empty()) {
            return layout;
        }

        for attribute in ORDERED_RESULT_ATTRIBUTES {
            if !selected.iter().any(|s| s == attribute) {
                continue;
            }
            if NAME_ATTRIBUTES.contains(&attribute) {
                layout.name_attribute = Some(attribute);
            } else {
                layout.attributes.push(attribute);
            }
        }

        layout
    }

    pub fn display_name<'a>(&self, person: &'a PersonSearchResult) -> Option<&'a str> {
        self.name_attribute
            .and_then(|attribute| person.names.get(attribute))
            .or(person.names.full_name.as_deref())
    }

    pub fn attribute_value<'a>(&self, person: &'a PersonSearchResult, attribute: &str) -> Option<&'a str> {
        match attribute {
            "ethosPersonId" => Some(person.id.as_str()),
            "birthDate" => person.date_of_birth.as_deref(),
            other => person.attribute(other),
        }
    }
}
