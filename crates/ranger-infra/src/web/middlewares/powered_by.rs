use axum::http::{header::InvalidHeaderValue, HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

const POWERED_BY_HEADER: HeaderName = HeaderName::from_static("x-powered-by");

/// Layer appending the `x-powered-by: service@version` header to each response.
pub struct PoweredBy;

impl PoweredBy {
    pub fn from_service_info<S1: AsRef<str>, S2: AsRef<str>>(
        service: S1,
        version: S2,
    ) -> Result<SetResponseHeaderLayer<HeaderValue>, InvalidHeaderValue> {
        let value = HeaderValue::from_str(&format!("{}@{}", service.as_ref(), version.as_ref()))?;
        Ok(SetResponseHeaderLayer::appending(POWERED_BY_HEADER, value))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use ranger_test::test;
    use tower::ServiceExt;

    #[test]
    async fn header_is_appended() {
        let layer = PoweredBy::from_service_info("person-search", "1.2.3").unwrap();
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()["x-powered-by"], "person-search@1.2.3");
    }

    #[test]
    fn invalid_version_is_rejected() {
        assert!(PoweredBy::from_service_info("person-search", "1.0\n").is_err());
    }
}
