mod extension_claims;
pub use self::extension_claims::*;
mod extension_jwt;
pub use self::extension_jwt::*;
mod extension_jwt_error;
pub use self::extension_jwt_error::*;
