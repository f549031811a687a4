use reqwest::StatusCode;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CardConfigError {
    #[error("Token has no card server configuration url")]
    MissingUrl,
    #[error("Extension api token is not configured")]
    MissingToken,
    #[error("Invalid card server configuration url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Card server configuration is not reachable")]
    Request(#[from] reqwest::Error),
    #[error("Card server configuration responded with ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("Unexpected card server configuration: {0}")]
    ResponseContent(String),
}
