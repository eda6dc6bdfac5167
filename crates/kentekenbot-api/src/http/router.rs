//! Axum router configuration with middleware.
//!
//! Routes keep the paths the chat widget already calls (`/api/postData`,
//! `/api/testchain`, `/api/tokenUsage`). Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/postData", post(handlers::conversation::post_data))
        .route("/testchain", get(handlers::diagnostic::test_chain))
        .route(
            "/tokenUsage",
            get(handlers::usage::get_token_usage).delete(handlers::usage::reset_token_usage),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
