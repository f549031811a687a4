use crate::{
    telemetry::TelemetryService,
    web::{
        auth::JwtValidator, controllers::HealthController, middlewares::PoweredBy, responses::ProblemConfig,
        FeatureConfig, WebAppConfig,
    },
};
use anyhow::{anyhow, Error as AnyError};
use axum::{
    http::{header, Method},
    routing::Router,
};
use axum_server::Handle;
use regex::bytes::Regex;
use serde::de::DeserializeOwned;
use std::{env, error::Error as StdError, fmt::Debug, fs, future::Future, net::SocketAddr, time::Duration};
use tokio::{net::TcpListener, runtime::Runtime, signal};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{instrument, level_filters::LevelFilter};
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::{Config as SwaggerConfig, SwaggerUi};

#[derive(OpenApi)]
#[openapi(paths(), components(), tags())]
struct ApiDoc;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
        log::warn!("Received ctrl-c, shutting down the server...")
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                log::warn!("Received SIGTERM, shutting down the server...")
            }
            Err(err) => {
                log::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

async fn graceful_shutdown(handle: Handle) {
    shutdown_signal().await;
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}

pub trait WebApplication {
    type AppConfig: FeatureConfig + DeserializeOwned + Debug + Send + Sync + 'static;
    type AppState: Clone + Send + Sync + 'static;

    fn feature_name(&self) -> &'static str {
        Self::AppConfig::NAME
    }

    fn create_state(
        &self,
        config: &WebAppConfig<Self::AppConfig>,
    ) -> impl Future<Output = Result<Self::AppState, AnyError>> + Send;

    fn create_routes(
        &self,
        config: &WebAppConfig<Self::AppConfig>,
    ) -> impl Future<Output = Result<OpenApiRouter<Self::AppState>, AnyError>> + Send;
}

fn prepare_web_app<A: WebApplication>(app: &A) -> Result<(WebAppConfig<A::AppConfig>, TelemetryService), AnyError> {
    let stage = env::args().nth(1).ok_or(anyhow!("Missing config stage parameter"))?;

    // the log macros are forwarded to tracing for the whole lifetime of the application
    LogTracer::init().map_err(|err| anyhow!("Failed to set log tracer: {err}"))?;

    // pre-init logger used until the telemetry is configured
    let _pre_init_log_guard = {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();
        let pre_init_log = tracing_subscriber::fmt().with_env_filter(env_filter).compact().finish();
        tracing::dispatcher::set_default(&pre_init_log.into())
    };

    let config = WebAppConfig::<A::AppConfig>::load(&stage, None)?;
    let telemetry_service = TelemetryService::new(app.feature_name(), &config.telemetry)?;
    log::info!("pre-init completed");

    Ok((config, telemetry_service))
}

fn create_cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, AnyError> {
    let allowed_origins = allowed_origins
        .iter()
        .map(|r| Regex::new(r))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| anyhow!("Cors config error: {err}"))?;
    let allow_origin = AllowOrigin::predicate(move |origin, _| {
        let origin = origin.as_bytes();
        allowed_origins.iter().any(|r| r.is_match(origin))
    });

    Ok(CorsLayer::default()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true))
}

#[instrument(skip(config, telemetry_service, app))]
async fn create_web_app<A: WebApplication>(
    config: &WebAppConfig<A::AppConfig>,
    telemetry_service: TelemetryService,
    app: &A,
) -> Result<Router<()>, AnyError> {
    log::info!("Creating services with telemetry filter [{}]...", telemetry_service.filter());

    let cors_layer = create_cors_layer(&config.service.allowed_origins)?;
    let powered_by_layer = PoweredBy::from_service_info(app.feature_name(), &config.core.version)?;
    let problem_detail_layer = ProblemConfig::new(config.service.full_problem_response).into_layer();
    let jwt_layer = JwtValidator::new(&config.service.jwt_secret).into_layer();
    let log_layer = telemetry_service.create_layer();

    log::info!("Creating application state...");
    let app_state = app.create_state(config).await?;

    log::info!("Creating routes...");
    let health_controller = HealthController::new(app.feature_name(), config).into_routes();
    let app_controller = app.create_routes(config).await?;
    let router = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(health_controller)
        .merge(app_controller);

    let (router, doc) = router.split_for_parts();

    log::info!("Creating swagger-ui...");
    let swagger = SwaggerUi::new("/doc/swagger-ui")
        .url("/doc/openapi.json", doc)
        .config(SwaggerConfig::default().show_common_extensions(true));

    Ok(router
        .merge(swagger)
        .layer(jwt_layer)
        .layer(problem_detail_layer)
        .layer(powered_by_layer)
        .layer(cors_layer)
        .layer(log_layer)
        .with_state(app_state))
}

async fn start_web_app<A: WebApplication>(app: A) -> Result<(), AnyError> {
    let (config, telemetry_service) = prepare_web_app(&app)?;
    let router = create_web_app(&config, telemetry_service, &app).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.service.port));

    if let Some(tls_config) = &config.service.tls {
        log::info!("Starting service on https://{addr:?} ...");
        let cert = fs::read(&tls_config.cert)?;
        let key = fs::read(&tls_config.key)?;
        let config = axum_server::tls_rustls::RustlsConfig::from_pem(cert, key)
            .await
            .map_err(|e| anyhow!(e))?;

        let handle = Handle::new();
        tokio::spawn(graceful_shutdown(handle.clone()));

        axum_server::bind_rustls(addr, config)
            .handle(handle)
            .serve(router.into_make_service())
            .await
            .map_err(|e| anyhow!(e))
    } else {
        log::info!("Starting service on http://{addr:?} ...");
        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow!(e))
    }
}

fn report_error(err: &AnyError) {
    eprintln!("[ERROR] {err}");
    let mut cause = err.source();
    if cause.is_some() {
        eprintln!();
        eprintln!("Caused by:");
    }
    let mut i = 0;
    while let Some(e) = cause {
        eprintln!("   {i}: {e}");
        cause = e.source();
        i += 1;
    }
}

pub fn run_web_app<A: WebApplication>(app: A) {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let result = Runtime::new()
        .map_err(AnyError::from)
        .and_then(|rt| rt.block_on(start_web_app(app)));

    if let Err(err) = result {
        report_error(&err);
        std::process::exit(1);
    }
}
