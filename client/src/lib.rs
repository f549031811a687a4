//! Client side of the person search card: calling the search service, handling the card configuration
//! and resolving where a selected person links to.

mod client_error;
pub use self::client_error::*;
mod person_search_client;
pub use self::person_search_client::*;
mod card_configuration;
pub use self::card_configuration::*;
mod result_layout;
pub use self::result_layout::*;
mod link_target;
pub use self::link_target::*;
