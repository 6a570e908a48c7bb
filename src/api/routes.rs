//! API route configuration.

use crate::api::handlers::{delete_alias_handler, get_alias_handler, save_alias_handler};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

/// Alias routes.
///
/// # Endpoints
///
/// - `POST   /url`           - Create an alias (basic auth)
/// - `GET    /url/{alias}`   - Redirect to the alias target (public)
/// - `DELETE /url/{alias}`   - Remove an alias (basic auth)
pub fn alias_routes(state: AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state, auth::layer);

    Router::new()
        .route("/url", post(save_alias_handler).route_layer(auth.clone()))
        .route(
            "/url/{alias}",
            get(get_alias_handler).merge(delete(delete_alias_handler).route_layer(auth)),
        )
}
