use crate::web::{
    auth::{ExtensionClaims, ExtensionJwtError},
    extracts::problem_config,
    responses::ErrorResponse,
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    Extension, RequestPartsExt,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::{ops, sync::Arc};

/// Validate the HS256 signed tokens of the extension cards.
pub struct JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        // cards are issued for various audiences, only the signature and the expiry are checked
        validation.validate_aud = false;
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn into_layer(self) -> Extension<Arc<Self>> {
        Extension(Arc::new(self))
    }

    pub fn validate(&self, token: &str) -> Result<ExtensionClaims, ExtensionJwtError> {
        let data = jsonwebtoken::decode::<ExtensionClaims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Extractor of the validated claims of the bearer token.
pub struct ExtensionJwt(ExtensionClaims);

impl ops::Deref for ExtensionJwt {
    type Target = ExtensionClaims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ExtensionJwt
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse<ExtensionJwtError>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let problem_config = problem_config(parts).await;

        // without a validator no token can be accepted
        let Extension(validator) = parts
            .extract::<Extension<Arc<JwtValidator>>>()
            .await
            .map_err(|_| {
                log::error!("Missing JwtValidator extension");
                ErrorResponse::new(&problem_config, ExtensionJwtError::Unauthenticated)
            })?;

        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ErrorResponse::new(&problem_config, ExtensionJwtError::Unauthenticated))?;
        let claims = validator
            .validate(token)
            .map_err(|err| ErrorResponse::new(&problem_config, err))?;

        log::debug!("Authorized card {:?} of tenant {:?}", claims.card.id, claims.tenant.id);
        Ok(ExtensionJwt(claims))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{EncodingKey, Header};
    use ranger_test::test;
    use serde_json::json;

    const SECRET: &str = "card-secret";

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    fn sign(claims: serde_json::Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_is_accepted() {
        let token = sign(
            json!({
                "card": { "id": "card-1", "cardServerConfigurationApiUrl": "https://experience/config/card-1" },
                "user": { "id": "user-1", "roles": ["Authenticated"] },
                "tenant": { "id": "tenant-1" },
                "exp": now() + 300
            }),
            SECRET,
        );

        let claims = JwtValidator::new(SECRET).validate(&token).unwrap();
        assert_eq!(claims.card.id.as_deref(), Some("card-1"));
        assert_eq!(
            claims.card.card_server_configuration_api_url.as_deref(),
            Some("https://experience/config/card-1")
        );
        assert_eq!(claims.user.roles, vec!["Authenticated"]);
    }

    #[test]
    fn token_with_audience_is_accepted() {
        let token = sign(
            json!({
                "aud": "experience",
                "card": { "id": "card-1" },
                "exp": now() + 300
            }),
            SECRET,
        );

        let claims = JwtValidator::new(SECRET).validate(&token).unwrap();
        assert_eq!(claims.card.id.as_deref(), Some("card-1"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign(json!({ "exp": now() - 3600 }), SECRET);
        let err = JwtValidator::new(SECRET).validate(&token).unwrap_err();
        assert!(matches!(err, ExtensionJwtError::Expired), "{err:?}");
    }

    #[test]
    fn token_with_wrong_signature_is_rejected() {
        let token = sign(json!({ "exp": now() + 300 }), "other-secret");
        let err = JwtValidator::new(SECRET).validate(&token).unwrap_err();
        assert!(matches!(err, ExtensionJwtError::Invalid(_)), "{err:?}");
    }

    #[test]
    fn bearer_token_is_parsed_from_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
