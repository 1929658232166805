//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::jwt::JwtManager;
use crate::migration;
use crate::openapi::ApiDoc;
use crate::repository::{SettingsRepositoryImpl, TenantDirectoryImpl};
use crate::service::{RedirectService, RedirectSettingsService};
use crate::state::HasServices;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: MySqlPool,
    pub redirect_service: Arc<RedirectService<SettingsRepositoryImpl, TenantDirectoryImpl>>,
    pub settings_service: Arc<RedirectSettingsService<SettingsRepositoryImpl>>,
    pub jwt_manager: JwtManager,
}

impl AppState {
    pub fn new(config: Config, db_pool: MySqlPool) -> Self {
        let settings_repo = Arc::new(SettingsRepositoryImpl::new(db_pool.clone()));
        let directory = Arc::new(TenantDirectoryImpl::new(db_pool.clone()));

        let settings_service = Arc::new(RedirectSettingsService::new(
            settings_repo,
            config.multi_tenant,
        ));
        let redirect_service = Arc::new(RedirectService::new(settings_service.clone(), directory));
        let jwt_manager = JwtManager::new(&config.jwt);

        Self {
            config: Arc::new(config),
            db_pool,
            redirect_service,
            settings_service,
            jwt_manager,
        }
    }
}

impl HasServices for AppState {
    type SettingsRepo = SettingsRepositoryImpl;
    type Tenants = TenantDirectoryImpl;

    fn config(&self) -> &Config {
        &self.config
    }

    fn redirect_service(&self) -> &RedirectService<Self::SettingsRepo, Self::Tenants> {
        &self.redirect_service
    }

    fn settings_service(&self) -> &RedirectSettingsService<Self::SettingsRepo> {
        &self.settings_service
    }

    fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    async fn check_ready(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.db_pool).await.is_ok()
    }
}

/// Serve the OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::build())
}

/// Build the application router
pub fn build_router<S: HasServices>(state: S) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // System
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready::<S>))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Login redirect invocation hook
        .route(
            "/api/v1/login/redirect",
            post(api::login_redirect::resolve_login_redirect::<S>),
        )
        // Redirect settings
        .route(
            "/api/v1/settings/redirect",
            get(api::settings::get_redirect_settings::<S>)
                .put(api::settings::update_redirect_settings::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    migration::run_migrations(&config).await?;

    let db_pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    let addr = config.http_addr();
    let state = AppState::new(config, db_pool);
    let router = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
