use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("Service url cannot hold resource paths: {0}")]
    InvalidServiceUrl(String),
    #[error("Person search service is not reachable")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected person search response: {0}")]
    ResponseContent(String),
}
