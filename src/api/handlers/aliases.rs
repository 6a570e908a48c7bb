//! Handlers for alias endpoints (create, resolve, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::alias::{SaveAliasRequest, StatusResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Maps an alias to a target URL.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "target": "https://example.com", "alias": "test" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for malformed JSON or a missing target or alias
/// - 409 Conflict if the alias is taken
/// - 500 Internal Server Error on storage failure
pub async fn save_alias_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveAliasRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StatusResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    state
        .alias_service
        .save_url(&payload.target, &payload.alias)
        .await?;

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /url/{alias}`
///
/// # Errors
///
/// - 404 Not Found if the alias is unknown
/// - 500 Internal Server Error on storage failure
pub async fn get_alias_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.alias_service.get_url(&alias).await?;

    debug!(%alias, %url, "Redirecting");
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}

/// Removes an alias. Removing an unknown alias succeeds.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (basic auth)
///
/// # Errors
///
/// - 500 Internal Server Error on storage failure
pub async fn delete_alias_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    state.alias_service.delete_url(&alias).await?;

    Ok(Json(StatusResponse::ok()))
}
