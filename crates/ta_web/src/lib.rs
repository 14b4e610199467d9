use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use ta_core::{Error, Result};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| Error::Config(format!("invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    // Credentials cannot be combined with wildcards, so mirror the request.
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn create_app(state: AppState, config: &ServerConfig) -> Result<Router> {
    let cors = cors_layer(config)?;

    Ok(Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/summarize", post(handlers::summarize))
        .route("/translate", post(handlers::translate))
        .route("/detect-language", post(handlers::detect))
        .route("/stats", post(handlers::stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

pub mod prelude {
    pub use crate::{create_app, AppState, ServerConfig};
    pub use ta_core::{Error, Result};
}
