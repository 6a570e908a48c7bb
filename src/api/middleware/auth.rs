//! Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use tracing::warn;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using HTTP basic auth.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(user:password)>
/// ```
///
/// The pair must match the single account configured via `AUTH_USER` and
/// `AUTH_PASSWORD`.
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if the
/// header is missing, malformed, or the credentials do not match.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if !st.credentials.matches(&user, password.as_deref()) {
        warn!(%user, "Rejected basic auth credentials");
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Invalid credentials"}),
        ));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
