//! HTTP routes.
//!
//! `/health` (and everything below it) is the liveness probe; every other path
//! is handed to the redirect resolver through the router fallback.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod redirect;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, X_CONTENT_TYPE_OPTIONS};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::HEALTH_PATH;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with the health and redirect routes.
pub fn create_router(state: AppState) -> Router {
    // Health check - any method, any path under /health
    let health_routes = Router::new()
        .route(HEALTH_PATH, any(health::health))
        .route(&format!("{}/", HEALTH_PATH), any(health::health))
        .route(&format!("{}/{{*rest}}", HEALTH_PATH), any(health::health));

    Router::new()
        .merge(health_routes)
        .fallback(redirect::redirect)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
