//! DTOs for alias endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to map an alias to a target URL.
///
/// `urlToSave` is accepted as another name for `target`. Both fields are
/// required; aliases are never generated.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveAliasRequest {
    /// The URL the alias resolves to. Must not be empty.
    #[serde(default, alias = "urlToSave")]
    #[validate(length(min = 1, message = "target is required"))]
    pub target: String,

    /// Caller-chosen alias. Must not be empty, since `/url/` has no route.
    #[serde(default)]
    #[validate(length(min = 1, message = "alias is required"))]
    pub alias: String,
}

/// Body returned by successful mutations.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "OK" }
    }
}
