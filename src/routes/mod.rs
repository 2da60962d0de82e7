pub mod auth;
pub mod docs;
pub mod health;
pub mod kpr;
pub mod scholarship;
pub mod users;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{
    auth::{require_admin, require_bearer_auth},
    cors::cors_layer,
    rate_limit::{rps_middleware, RateLimiter},
};
use crate::AppState;

/// Request body cap; logos and application forms arrive base64 encoded.
const BODY_LIMIT: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub public_rps: u32,
    pub admin_rps: u32,
    pub cors_origins: Vec<String>,
}

impl From<&crate::config::Config> for RouterOptions {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            public_rps: config.public_rps,
            admin_rps: config.admin_rps,
            cors_origins: config.cors_origins.clone(),
        }
    }
}

pub fn build_router(state: AppState, options: &RouterOptions) -> Router {
    let public_api = Router::new()
        .route("/api/scholarships", get(scholarship::list_scholarships))
        .route("/api/scholarships/:id", get(scholarship::get_scholarship))
        .route("/api/scholarships/:id/logo", get(scholarship::get_logo))
        .route(
            "/api/scholarships/:id/application-form",
            get(scholarship::download_application_form),
        )
        .route("/api/kpr/programs", get(kpr::list_programs))
        .route("/api/kpr/programs/:slug", get(kpr::get_program))
        .route(
            "/api/kpr/programs/:slug/document",
            get(kpr::download_document),
        )
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .layer(from_fn_with_state(
            RateLimiter::new(options.public_rps),
            rps_middleware,
        ));

    let account_api = Router::new()
        .route("/api/users/me", get(users::get_me).patch(users::update_me))
        .route_layer(from_fn_with_state(state.clone(), require_bearer_auth));

    let admin_api = Router::new()
        .route("/api/scholarships", post(scholarship::create_scholarship))
        .route(
            "/api/scholarships/:id",
            put(scholarship::update_scholarship).delete(scholarship::delete_scholarship),
        )
        .route_layer(from_fn_with_state(state.clone(), require_admin))
        .layer(from_fn_with_state(
            RateLimiter::new(options.admin_rps),
            rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(docs::openapi_json))
        .merge(public_api)
        .merge(account_api)
        .merge(admin_api)
        .with_state(state)
        .layer(cors_layer(&options.cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}
