//! Alias creation, resolution and removal service.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::events::EventSink;
use crate::domain::repositories::{AliasStore, StoreError};

/// Errors returned by [`AliasService`].
///
/// Store failures the service does not relabel are carried verbatim in
/// [`ServiceError::Store`] so operators keep the backend detail.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("alias `{alias}` already exists")]
    UrlAlreadyExists { alias: String },

    #[error("URL not found for alias `{alias}`")]
    UrlNotFound { alias: String },

    #[error("{field} {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Transport-agnostic classification of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidInput,
    BackendFailure,
}

impl ServiceError {
    /// Returns the error kind.
    ///
    /// A store error that reaches the service unclassified is always a backend
    /// failure, even if its variant would otherwise be meaningful.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::UrlAlreadyExists { .. } => ErrorKind::AlreadyExists,
            ServiceError::UrlNotFound { .. } => ErrorKind::NotFound,
            ServiceError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ServiceError::Store(_) => ErrorKind::BackendFailure,
        }
    }
}

/// Service for saving, resolving and deleting alias mappings.
///
/// Holds no state besides its store and event sink; every call is an
/// independent round trip to the store with no retries.
pub struct AliasService<S: AliasStore + ?Sized> {
    store: Arc<S>,
    events: Arc<dyn EventSink>,
}

impl<S: AliasStore + ?Sized> AliasService<S> {
    /// Creates a new alias service.
    pub fn new(store: Arc<S>, events: Arc<dyn EventSink>) -> Self {
        Self { store, events }
    }

    /// Maps `alias` to `url_to_save`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidInput`] if `url_to_save` is empty; the
    /// store is not called in that case.
    ///
    /// Returns [`ServiceError::UrlAlreadyExists`] if the alias is taken.
    ///
    /// Any other store failure is returned as [`ServiceError::Store`].
    pub async fn save_url(&self, url_to_save: &str, alias: &str) -> Result<(), ServiceError> {
        if url_to_save.is_empty() {
            self.events
                .record("alias.save_rejected", &[("alias", alias), ("field", "target")]);
            return Err(ServiceError::InvalidInput {
                field: "target",
                reason: "is required".to_string(),
            });
        }

        match self.store.save(url_to_save, alias).await {
            Ok(()) => {
                self.events
                    .record("alias.saved", &[("alias", alias), ("target", url_to_save)]);
                Ok(())
            }
            Err(StoreError::AliasExists { alias }) => {
                self.events.record("alias.conflict", &[("alias", alias.as_str())]);
                Err(ServiceError::UrlAlreadyExists { alias })
            }
            Err(StoreError::EmptyTarget { .. }) => {
                self.events
                    .record("alias.save_rejected", &[("alias", alias), ("field", "target")]);
                Err(ServiceError::InvalidInput {
                    field: "target",
                    reason: "is required".to_string(),
                })
            }
            Err(e) => Err(self.backend_failure("save", alias, e)),
        }
    }

    /// Resolves `alias` to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UrlNotFound`] if no mapping exists.
    /// Any other store failure is returned as [`ServiceError::Store`].
    pub async fn get_url(&self, alias: &str) -> Result<String, ServiceError> {
        match self.store.get(alias).await {
            Ok(url) => {
                self.events.record("alias.resolved", &[("alias", alias)]);
                Ok(url)
            }
            Err(StoreError::NotFound { alias }) => {
                self.events.record("alias.not_found", &[("alias", alias.as_str())]);
                Err(ServiceError::UrlNotFound { alias })
            }
            Err(e) => Err(self.backend_failure("get", alias, e)),
        }
    }

    /// Removes the mapping for `alias`. Succeeds if there was none.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store fails.
    pub async fn delete_url(&self, alias: &str) -> Result<(), ServiceError> {
        match self.store.delete(alias).await {
            Ok(()) => {
                self.events.record("alias.deleted", &[("alias", alias)]);
                Ok(())
            }
            Err(e) => Err(self.backend_failure("delete", alias, e)),
        }
    }

    /// Returns `true` if the underlying store answers.
    pub async fn is_healthy(&self) -> bool {
        self.store.health_check().await
    }

    fn backend_failure(&self, op: &str, alias: &str, e: StoreError) -> ServiceError {
        let error = e.to_string();
        self.events.record(
            "alias.backend_failure",
            &[("op", op), ("alias", alias), ("error", error.as_str())],
        );
        ServiceError::Store(e)
    }
}
