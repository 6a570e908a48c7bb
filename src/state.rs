//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::AliasService;
use crate::config::AuthCredentials;
use crate::domain::events::EventSink;
use crate::domain::repositories::AliasStore;

/// State shared by all handlers.
///
/// Built once at startup; the store and event sink are chosen by the caller so
/// tests can run the full router against an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService<dyn AliasStore>>,
    pub credentials: Arc<AuthCredentials>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn AliasStore>,
        events: Arc<dyn EventSink>,
        credentials: AuthCredentials,
    ) -> Self {
        Self {
            alias_service: Arc::new(AliasService::new(store, events)),
            credentials: Arc::new(credentials),
        }
    }
}
