use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, HttpMakeClassifier, TraceLayer};
use tracing::{Dispatch, Level};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, registry};

use super::{ConsoleFormat, TelemetryBuildError, TelemetryConfig};

/// Telemetry service.
///
/// Logs
///  - The tracing::trace,debug,info,warn,error! macros can be used
///  - For convenience, the log::trace,debug,info,warn,error! macros are also available and channelled to the tracing
///    layer by the LogTracer installed in the pre-init phase of the web application
///
/// Requests
///  - Each http request is wrapped into a span and the responses are logged at info level
#[derive(Clone)]
pub struct TelemetryService {
    service_name: &'static str,
    filter: String,
}

impl TelemetryService {
    pub fn new(service_name: &'static str, config: &TelemetryConfig) -> Result<Self, TelemetryBuildError> {
        let service = TelemetryService {
            service_name,
            filter: config.default_level.as_deref().unwrap_or("warn").to_string(),
        };
        service.install_trace(config)?;
        Ok(service)
    }

    fn set_global_tracing_pipeline<P>(pipeline: P) -> Result<(), TelemetryBuildError>
    where
        P: Into<Dispatch>,
    {
        //Note: pipeline.init (SubscriberInitExt::init) cannot be used as the LogTracer is already installed
        // in the pre-init phase. Calling init here would result in a double install error.
        tracing::dispatcher::set_global_default(pipeline.into())?;
        Ok(())
    }

    fn install_trace(&self, config: &TelemetryConfig) -> Result<(), TelemetryBuildError> {
        log::debug!("Registering tracing pipeline for {} with [{}]...", self.service_name, self.filter);
        let env_filter = EnvFilter::builder().parse(&self.filter)?;

        if !config.enable_console_log {
            log::warn!("Service is configured for silent mode");
            return Self::set_global_tracing_pipeline(registry().with(env_filter));
        }

        match config.console_format {
            ConsoleFormat::Compact => Self::set_global_tracing_pipeline(
                registry()
                    .with(env_filter)
                    .with(fmt::Layer::new().compact()),
            ),
            ConsoleFormat::Pretty => Self::set_global_tracing_pipeline(
                registry()
                    .with(env_filter)
                    .with(fmt::Layer::new().pretty()),
            ),
            ConsoleFormat::Json => Self::set_global_tracing_pipeline(
                registry()
                    .with(env_filter)
                    .with(fmt::Layer::new().json()),
            ),
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn create_layer(&self) -> TraceLayer<HttpMakeClassifier> {
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO))
    }
}
