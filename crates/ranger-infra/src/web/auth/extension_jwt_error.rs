use crate::web::responses::Problem;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use thiserror::Error as ThisError;

mod pr {
    pub const INVALID_TOKEN: &str = "auth-invalid-token";
    pub const TOKEN_EXPIRED: &str = "auth-token-expired";
}

#[derive(Debug, ThisError)]
pub enum ExtensionJwtError {
    #[error("Missing bearer token")]
    Unauthenticated,
    #[error("Token expired")]
    Expired,
    #[error("Invalid token")]
    Invalid(#[source] JwtError),
}

impl From<JwtError> for ExtensionJwtError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            JwtErrorKind::ExpiredSignature => ExtensionJwtError::Expired,
            _ => ExtensionJwtError::Invalid(err),
        }
    }
}

impl From<ExtensionJwtError> for Problem {
    fn from(value: ExtensionJwtError) -> Self {
        match value {
            ExtensionJwtError::Unauthenticated => Problem::unauthorized()
                .with_detail(value.to_string())
                .with_sensitive("unauthenticated"),
            ExtensionJwtError::Expired => Problem::unauthorized_ty(pr::TOKEN_EXPIRED).with_detail(value.to_string()),
            ExtensionJwtError::Invalid(ref err) => Problem::unauthorized_ty(pr::INVALID_TOKEN)
                .with_detail(value.to_string())
                .with_sensitive_dbg(err),
        }
    }
}
