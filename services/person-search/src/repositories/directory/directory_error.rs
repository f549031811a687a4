use reqwest::StatusCode;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DirectoryError {
    #[error("Person directory is not reachable")]
    Request(#[from] reqwest::Error),
    #[error("Person directory responded with ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("Unexpected person directory response: {0}")]
    ResponseContent(String),
    #[error("Criteria could not be encoded")]
    Criteria(#[from] serde_json::Error),
    #[error("Base url cannot hold resource paths: {0}")]
    BaseUrl(String),
}
