mod search_persons;
pub use self::search_persons::*;
