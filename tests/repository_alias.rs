mod common;

use alias_shortener::domain::repositories::{AliasStore, StoreError};
use alias_shortener::infrastructure::persistence::PgAliasStore;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_bootstrap_is_idempotent(pool: PgPool) {
    let store = PgAliasStore::new(Arc::new(pool));

    store.bootstrap().await.unwrap();
    store.bootstrap().await.unwrap();

    assert!(store.health_check().await);
}

#[sqlx::test]
async fn test_save_and_get(pool: PgPool) {
    let store = common::create_pg_store(pool).await;

    store.save("https://example.com", "test").await.unwrap();

    assert_eq!(store.get("test").await.unwrap(), "https://example.com");
}

#[sqlx::test]
async fn test_get_not_found(pool: PgPool) {
    let store = common::create_pg_store(pool).await;

    let err = store.get("notfound").await.unwrap_err();

    assert!(matches!(err, StoreError::NotFound { ref alias } if alias == "notfound"));
}

#[sqlx::test]
async fn test_get_is_case_sensitive(pool: PgPool) {
    let store = common::create_pg_store(pool.clone()).await;
    common::create_test_alias(&pool, "Docs", "https://docs.rs").await;

    assert!(matches!(
        store.get("docs").await.unwrap_err(),
        StoreError::NotFound { .. }
    ));
    assert_eq!(store.get("Docs").await.unwrap(), "https://docs.rs");
}

#[sqlx::test]
async fn test_save_duplicate_alias(pool: PgPool) {
    let store = common::create_pg_store(pool.clone()).await;
    store.save("https://example.com", "test").await.unwrap();

    let err = store.save("https://other.com", "test").await.unwrap_err();

    assert!(matches!(err, StoreError::AliasExists { ref alias } if alias == "test"));
    assert_eq!(store.get("test").await.unwrap(), "https://example.com");
    assert_eq!(common::count_aliases(&pool, "test").await, 1);
}

#[sqlx::test]
async fn test_save_empty_target_is_rejected(pool: PgPool) {
    let store = common::create_pg_store(pool.clone()).await;

    let err = store.save("", "empty").await.unwrap_err();

    assert!(matches!(err, StoreError::EmptyTarget { ref alias } if alias == "empty"));
    assert_eq!(common::count_aliases(&pool, "empty").await, 0);
}

#[sqlx::test]
async fn test_delete_existing(pool: PgPool) {
    let store = common::create_pg_store(pool.clone()).await;
    common::create_test_alias(&pool, "gone", "https://example.com").await;

    store.delete("gone").await.unwrap();

    assert_eq!(common::count_aliases(&pool, "gone").await, 0);
}

#[sqlx::test]
async fn test_delete_missing_is_ok(pool: PgPool) {
    let store = common::create_pg_store(pool).await;

    assert!(store.delete("never-saved").await.is_ok());
    assert!(matches!(
        store.get("never-saved").await.unwrap_err(),
        StoreError::NotFound { .. }
    ));
}

#[sqlx::test]
async fn test_closed_pool_is_backend_error(pool: PgPool) {
    let store = common::create_pg_store(pool.clone()).await;
    pool.close().await;

    assert!(matches!(
        store.get("test").await.unwrap_err(),
        StoreError::Backend(_)
    ));
    assert!(matches!(
        store.save("https://example.com", "test").await.unwrap_err(),
        StoreError::Backend(_)
    ));
    assert!(!store.health_check().await);
}

#[sqlx::test]
async fn test_concurrent_saves_have_one_winner(pool: PgPool) {
    let store = common::create_pg_store(pool.clone()).await;

    let (first, second) = tokio::join!(
        store.save("https://first.com", "race"),
        store.save("https://second.com", "race"),
    );

    let winner = match (first, second) {
        (Ok(()), Err(StoreError::AliasExists { .. })) => "https://first.com",
        (Err(StoreError::AliasExists { .. }), Ok(())) => "https://second.com",
        other => panic!("expected exactly one winner, got {other:?}"),
    };

    assert_eq!(store.get("race").await.unwrap(), winner);
    assert_eq!(common::count_aliases(&pool, "race").await, 1);
}

#[sqlx::test]
async fn test_table_rejects_empty_target(pool: PgPool) {
    common::create_pg_store(pool.clone()).await;

    let result = sqlx::query("INSERT INTO url (url, alias) VALUES ('', 'raw')")
        .execute(&pool)
        .await;

    assert!(result.is_err());
    assert_eq!(common::count_aliases(&pool, "raw").await, 0);
}
