mod directory_error;
pub use self::directory_error::*;
mod person_record;
pub use self::person_record::*;
mod person_criteria;
pub use self::person_criteria::*;
mod person_directory;
pub use self::person_directory::*;
mod ethos_client;
pub use self::ethos_client::*;
