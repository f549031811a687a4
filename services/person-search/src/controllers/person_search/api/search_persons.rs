use crate::{
    app_state::AppState,
    services::{SearchRequest, TransformedPerson},
};
use axum::{extract::State, Extension, Json};
use ranger_infra::web::{
    auth::ExtensionJwt,
    extracts::ValidatedQuery,
    responses::{IntoProblemResponse, ProblemConfig, ProblemResponse},
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// Name or identifier of the person, an empty search returns no result
    #[serde(default)]
    #[validate(length(max = 256))]
    search_string: String,
}

#[utoipa::path(
    get,
    path = "/person-search",
    tag = "person-search",
    params(
        QueryParams
    ),
    responses(
        (status = OK, description = "Matching persons ordered by last and first name"),
        (status = UNAUTHORIZED, description = "Missing or invalid card token"),
        (status = INTERNAL_SERVER_ERROR, description = "The search could not be performed")
    )
)]
pub async fn search_persons(
    State(state): State<AppState>,
    Extension(problem_config): Extension<ProblemConfig>,
    jwt: ExtensionJwt,
    ValidatedQuery(query): ValidatedQuery<QueryParams>,
) -> Result<Json<Vec<TransformedPerson>>, ProblemResponse> {
    let search_string = query.search_string;

    let configuration = if search_string.is_empty() {
        Default::default()
    } else {
        let url = jwt.card.card_server_configuration_api_url.as_deref();
        state.card_config().load(url).await
    };

    let request = SearchRequest::from_configuration(search_string, configuration)
        .map_err(|err| err.into_response(&problem_config))?;
    let persons = state
        .person_search()
        .search(&request)
        .await
        .map_err(|err| err.into_response(&problem_config))?;

    Ok(Json(persons))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        repositories::{
            card_config::{CardConfigApiConfig, CardConfigClient},
            directory::{EthosClient, EthosConfig},
        },
        services::PersonSearchService,
    };
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use jsonwebtoken::{EncodingKey, Header};
    use ranger_infra::web::auth::JwtValidator;
    use ranger_test::test;
    use serde_json::{json, Value as JsonValue};
    use tower::ServiceExt;
    use url::Url;
    use utoipa_axum::{router::OpenApiRouter, routes};
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    const SECRET: &str = "card-secret";

    fn router(server: &MockServer) -> Router {
        let ethos = EthosClient::new(&EthosConfig {
            base_url: Url::parse(&server.uri()).unwrap(),
            api_key: "api-key".into(),
            accept_type: "application/json".into(),
            token_ttl: 240,
            request_timeout: 5,
        })
        .unwrap();
        let card_config = CardConfigClient::new(
            &CardConfigApiConfig {
                extension_api_token: Some("extension-token".into()),
                request_timeout: 5,
            },
            None,
        )
        .unwrap();
        let state = AppState::from_parts(PersonSearchService::new(ethos), card_config);

        let (router, _) = OpenApiRouter::new()
            .routes(routes!(search_persons))
            .split_for_parts();
        router
            .layer(JwtValidator::new(SECRET).into_layer())
            .layer(ProblemConfig::new(false).into_layer())
            .with_state(state)
    }

    fn token(server: &MockServer) -> String {
        let claims = json!({
            "card": {
                "id": "card-1",
                "cardServerConfigurationApiUrl": format!("{}/config/card-1", server.uri())
            },
            "exp": chrono::Utc::now().timestamp() + 300
        });
        jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
    }

    async fn get(router: Router, uri: &str, token: Option<&str>) -> (StatusCode, JsonValue) {
        let mut request = Request::get(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = router.oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn mount_card_config(server: &MockServer, config: JsonValue) {
        Mock::given(method("GET"))
            .and(path("/config/card-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(config))
            .mount(server)
            .await;
    }

    async fn mount_auth(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ethos-token"))
            .mount(server)
            .await;
    }

    #[test]
    async fn search_returns_sorted_persons() {
        let server = MockServer::start().await;
        mount_auth(&server).await;
        mount_card_config(
            &server,
            json!({
                "erpIdentifier": "bannerId",
                "searchBy": "bannerId,names",
                "searchRole": "any",
                "searchResultsAttributes": ["fullName", "email"]
            }),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/api/persons"))
            .and(query_param("criteria", r#"{"names":[{"lastName":"doe"}]}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "g2",
                    "names": [{ "preference": "preferred", "firstName": "John", "lastName": "Doe" }],
                    "credentials": [{ "type": "bannerId", "value": "B2" }]
                },
                {
                    "id": "g1",
                    "names": [{ "preference": "preferred", "firstName": "Jane", "lastName": "Doe" }],
                    "emails": [{ "preference": "primary", "address": "jane@my.edu" }],
                    "credentials": [{ "type": "bannerId", "value": "B1" }]
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/persons"))
            .and(query_param("criteria", r#"{"credentials":[{"type":"bannerId","value":"doe"}]}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let token = token(&server);
        let (status, body) = get(router(&server), "/person-search?searchString=doe", Some(&token)).await;
        assert_eq!(status, StatusCode::OK, "{body:#?}");
        assert_eq!(
            body,
            json!([
                {
                    "id": "g1",
                    "names": { "preference": "preferred", "firstName": "Jane", "lastName": "Doe" },
                    "email": "jane@my.edu",
                    "bannerId": "B1"
                },
                {
                    "id": "g2",
                    "names": { "preference": "preferred", "firstName": "John", "lastName": "Doe" },
                    "bannerId": "B2"
                }
            ])
        );
    }

    #[test]
    async fn empty_search_returns_empty_list() {
        let server = MockServer::start().await;

        let token = token(&server);
        let (status, body) = get(router(&server), "/person-search?searchString=", Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[test]
    async fn missing_search_by_is_a_server_error() {
        let server = MockServer::start().await;
        mount_card_config(&server, json!({ "searchRole": "any" })).await;

        let token = token(&server);
        let (status, body) = get(router(&server), "/person-search?searchString=doe", Some(&token)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["type"], "person-search-failed");
        assert_eq!(
            body["extension"],
            json!({ "data": [], "error": "No search-by types are configured" })
        );
    }

    #[test]
    async fn token_failure_is_a_server_error() {
        let server = MockServer::start().await;
        mount_card_config(&server, json!({ "searchBy": ["names"] })).await;
        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let token = token(&server);
        let (status, body) = get(router(&server), "/person-search?searchString=doe", Some(&token)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["extension"]["data"], json!([]));
        assert_eq!(body["sensitive"], JsonValue::Null);
    }

    #[test]
    async fn request_without_token_is_rejected() {
        let server = MockServer::start().await;

        let (status, body) = get(router(&server), "/person-search?searchString=doe", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["type"], "unauthorized");

        let (status, _) = get(router(&server), "/person-search?searchString=doe", Some("not-a-jwt")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    async fn too_long_search_is_rejected() {
        let server = MockServer::start().await;

        let token = token(&server);
        let uri = format!("/person-search?searchString={}", "a".repeat(257));
        let (status, body) = get(router(&server), &uri, Some(&token)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "input-validation");
    }
}
