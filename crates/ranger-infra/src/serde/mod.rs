mod status_code;
pub use self::status_code::*;
mod string_list;
pub use self::string_list::*;
