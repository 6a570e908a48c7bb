//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`           - Create an alias (basic auth)
//! - `GET    /url/{alias}`   - Redirect to the alias target
//! - `DELETE /url/{alias}`   - Remove an alias (basic auth)
//! - `GET    /health`        - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Basic auth on mutating routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::alias_routes(state.clone()))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
