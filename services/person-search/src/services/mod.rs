mod search_request;
pub use self::search_request::*;
mod search_failure;
pub use self::search_failure::*;
mod criteria_builder;
pub use self::criteria_builder::*;
mod locale_compare;
pub use self::locale_compare::*;
mod person_transform;
pub use self::person_transform::*;
mod person_search_service;
pub use self::person_search_service::*;

#[cfg(test)]
mod test_directory;
