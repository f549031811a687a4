mod validated;
pub use self::validated::*;
