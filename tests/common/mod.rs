#![allow(dead_code)]

use alias_shortener::config::AuthCredentials;
use alias_shortener::domain::events::TracingEventSink;
use alias_shortener::domain::repositories::{AliasStore, StoreError};
use alias_shortener::infrastructure::persistence::{MemoryAliasStore, PgAliasStore};
use alias_shortener::state::AppState;
use async_trait::async_trait;
use axum::http::HeaderValue;
use sqlx::PgPool;
use std::sync::Arc;

pub const AUTH_USER: &str = "admin";
pub const AUTH_PASSWORD: &str = "secret";

/// `Basic base64("admin:secret")`
pub fn basic_auth() -> HeaderValue {
    HeaderValue::from_static("Basic YWRtaW46c2VjcmV0")
}

/// `Basic base64("admin:wrong")`
pub fn wrong_basic_auth() -> HeaderValue {
    HeaderValue::from_static("Basic YWRtaW46d3Jvbmc=")
}

pub fn credentials() -> AuthCredentials {
    AuthCredentials::new(AUTH_USER, AUTH_PASSWORD)
}

pub fn create_memory_state() -> (AppState, Arc<MemoryAliasStore>) {
    let store = Arc::new(MemoryAliasStore::new());
    let state = AppState::new(
        store.clone(),
        Arc::new(TracingEventSink::new()),
        credentials(),
    );

    (state, store)
}

pub async fn create_pg_store(pool: PgPool) -> Arc<PgAliasStore> {
    let store = PgAliasStore::new(Arc::new(pool));
    store.bootstrap().await.unwrap();
    Arc::new(store)
}

pub async fn create_test_alias(pool: &PgPool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES ($1, $2)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_aliases(pool: &PgPool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = $1")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Store whose backend is always unreachable.
pub struct UnavailableStore;

#[async_trait]
impl AliasStore for UnavailableStore {
    async fn save(&self, _target: &str, _alias: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend(sqlx::Error::PoolClosed))
    }

    async fn get(&self, _alias: &str) -> Result<String, StoreError> {
        Err(StoreError::Backend(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _alias: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend(sqlx::Error::PoolClosed))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_unavailable_state() -> AppState {
    AppState::new(
        Arc::new(UnavailableStore),
        Arc::new(TracingEventSink::new()),
        credentials(),
    )
}
