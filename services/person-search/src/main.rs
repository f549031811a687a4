mod app_config;
mod app_state;
mod controllers;
mod repositories;
mod services;

use self::{app_config::AppConfig, app_state::AppState};
use anyhow::Error as AnyError;
use controllers::person_search::PersonSearchController;
use ranger_infra::web::{WebAppConfig, WebApplication};
use utoipa_axum::router::OpenApiRouter;

struct Application;

impl WebApplication for Application {
    type AppConfig = AppConfig;
    type AppState = AppState;

    fn feature_name(&self) -> &'static str {
        "person-search"
    }

    async fn create_state(&self, config: &WebAppConfig<Self::AppConfig>) -> Result<Self::AppState, AnyError> {
        AppState::new(config)
    }

    async fn create_routes(
        &self,
        _config: &WebAppConfig<Self::AppConfig>,
    ) -> Result<OpenApiRouter<Self::AppState>, AnyError> {
        Ok(PersonSearchController::new().into_router())
    }
}

pub fn main() {
    let app = Application;
    ranger_infra::web::run_web_app(app);
}
