//! Storage contract for alias records.

use async_trait::async_trait;
use thiserror::Error;

/// Failures a store can report.
///
/// Stores classify only what the backend tells them directly: a uniqueness
/// violation on the alias key, the absence of a row, or anything else. An
/// empty target is refused before the backend is touched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already owns this alias.
    #[error("alias `{alias}` already exists")]
    AliasExists { alias: String },

    /// The target URL was empty; nothing was written.
    #[error("empty target for alias `{alias}`")]
    EmptyTarget { alias: String },

    /// No record matches the alias.
    #[error("alias `{alias}` not found")]
    NotFound { alias: String },

    /// Connectivity, timeout, malformed query or any unclassified failure.
    #[error("storage backend error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Durable mapping from alias to target URL.
///
/// Uniqueness of the alias is enforced by the backend itself. Implementations
/// must not check for an existing alias before inserting; concurrent saves of
/// the same alias are resolved by the backend so exactly one of them wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryAliasStore`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyTarget`] if `target` is empty,
    /// [`StoreError::AliasExists`] if the alias is taken and
    /// [`StoreError::Backend`] on any other failure. Nothing is written when an
    /// error is returned.
    async fn save(&self, target: &str, alias: &str) -> Result<(), StoreError>;

    /// Looks up the target for an exact, case-sensitive alias.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches.
    /// Returns [`StoreError::Backend`] on database errors.
    async fn get(&self, alias: &str) -> Result<String, StoreError>;

    /// Removes the record for `alias` if there is one.
    ///
    /// Removing an alias that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    async fn delete(&self, alias: &str) -> Result<(), StoreError>;

    /// Returns `true` if the backend answers.
    async fn health_check(&self) -> bool;
}
