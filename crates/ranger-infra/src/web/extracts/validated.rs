use crate::web::responses::{problems, ErrorResponse, Problem, ProblemConfig};
use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::request::Parts,
    Extension, RequestPartsExt,
};
use serde::de::DeserializeOwned;
use thiserror::Error as ThisError;
use validator::{Validate, ValidationErrors};

#[derive(Debug, ThisError)]
pub enum InputError {
    #[error("Query could not be parsed for input")]
    QueryFormat(QueryRejection),
    #[error("Input constraint violated")]
    Constraint(ValidationErrors),
}

impl From<InputError> for Problem {
    fn from(value: InputError) -> Self {
        match value {
            InputError::QueryFormat(err) => Problem::bad_request(problems::INPUT_QUERY).with_detail(format!("{err}")),
            InputError::Constraint(detail) => Problem::bad_request(problems::INPUT_VALIDATION).with_extension(detail),
        }
    }
}

/// Get the problem configuration of the request, the default configuration hides the sensitive data.
pub(crate) async fn problem_config(parts: &mut Parts) -> ProblemConfig {
    parts
        .extract::<Extension<ProblemConfig>>()
        .await
        .map(|Extension(config)| config)
        .unwrap_or_else(|_| {
            log::warn!("Missing ProblemConfig extension, using the default");
            ProblemConfig::new(false)
        })
}

/// Query extractor that also checks the constraints of the query.
pub struct ValidatedQuery<T>(pub T)
where
    T: DeserializeOwned + Validate + 'static;

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + 'static,
{
    type Rejection = ErrorResponse<InputError>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let problem_config = problem_config(parts).await;

        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| ErrorResponse::new(&problem_config, InputError::QueryFormat(err)))?;
        data.validate()
            .map_err(|err| ErrorResponse::new(&problem_config, InputError::Constraint(err)))?;
        Ok(Self(data))
    }
}
