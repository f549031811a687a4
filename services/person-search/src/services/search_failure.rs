use ranger_infra::web::responses::Problem;
use serde::{ser::SerializeStruct, Serialize, Serializer};
use serde_json::Value as JsonValue;
use thiserror::Error as ThisError;

pub const SEARCH_FAILED: &str = "person-search-failed";

/// The search could not be performed at all. Serialized as `{"data": [], "error": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{error}")]
pub struct SearchFailure {
    pub error: String,
}

impl SearchFailure {
    pub fn new<S: ToString>(error: S) -> Self {
        Self { error: error.to_string() }
    }
}

impl Serialize for SearchFailure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SearchFailure", 2)?;
        state.serialize_field("data", &[] as &[JsonValue])?;
        state.serialize_field("error", &self.error)?;
        state.end()
    }
}

impl From<SearchFailure> for Problem {
    fn from(err: SearchFailure) -> Self {
        Problem::internal_error_ty(SEARCH_FAILED)
            .with_detail(&err.error)
            .with_extension(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::StatusCode;
    use ranger_test::test;
    use serde_json::json;

    #[test]
    fn failure_is_serialized_with_empty_data() {
        let failure = SearchFailure::new("token expired");
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!({ "data": [], "error": "token expired" })
        );
    }

    #[test]
    fn failure_is_an_internal_error_problem() {
        let problem = Problem::from(SearchFailure::new("token expired"));
        assert_eq!(problem.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(problem.ty, SEARCH_FAILED);
        assert_eq!(problem.detail, "token expired");
        assert_eq!(problem.extension, json!({ "data": [], "error": "token expired" }));
    }
}
