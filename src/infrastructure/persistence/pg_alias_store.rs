//! PostgreSQL implementation of the alias store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{DatabaseSettings, PoolSettings};
use crate::domain::repositories::{AliasStore, StoreError};

/// Name of the unique constraint on `url.alias`.
const ALIAS_CONSTRAINT: &str = "url_alias_key";

/// Arbitrary key serializing concurrent schema bootstraps.
const BOOTSTRAP_LOCK_KEY: i64 = 0x616c_6961_73;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        id BIGSERIAL PRIMARY KEY,
        alias TEXT NOT NULL,
        url TEXT NOT NULL CHECK (url <> ''),
        CONSTRAINT url_alias_key UNIQUE (alias)
    )
"#;

const CREATE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url (alias)";

/// PostgreSQL store for alias records.
///
/// Uniqueness is enforced by the `url_alias_key` constraint; a violation of it
/// is reported as [`StoreError::AliasExists`]. Empty targets are refused
/// before the insert and the table's `CHECK` constraint backs that up. Queries are bound at runtime so
/// the crate builds without a live database.
#[derive(Debug, Clone)]
pub struct PgAliasStore {
    pool: Arc<PgPool>,
}

impl PgAliasStore {
    /// Creates a store on top of an existing connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a connection pool from explicit connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the database is unreachable or
    /// rejects the credentials.
    pub async fn connect(
        database: &DatabaseSettings,
        pool: &PoolSettings,
    ) -> Result<Self, StoreError> {
        let options = PgConnectOptions::new()
            .host(&database.host)
            .port(database.port)
            .username(&database.user)
            .password(&database.password)
            .database(&database.name);

        let pool = PgPoolOptions::new()
            .max_connections(pool.max_connections)
            .acquire_timeout(Duration::from_secs(pool.connect_timeout))
            .idle_timeout(Some(Duration::from_secs(pool.idle_timeout)))
            .max_lifetime(Some(Duration::from_secs(pool.max_lifetime)))
            .connect_with(options)
            .await?;

        info!(
            host = %database.host,
            port = database.port,
            database = %database.name,
            "Connected to database"
        );

        Ok(Self::new(Arc::new(pool)))
    }

    /// Creates the `url` table and its alias index if they do not exist.
    ///
    /// Safe to run on every start, including from several processes at once:
    /// the statements run in one transaction behind an advisory lock.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on database errors.
    pub async fn bootstrap(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(BOOTSTRAP_LOCK_KEY)
            .execute(&mut *tx)
            .await?;
        sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;
        sqlx::query(CREATE_INDEX).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(())
    }
}

/// Returns `true` if `e` is a violation of the alias unique constraint.
fn is_alias_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ALIAS_CONSTRAINT))
}

#[async_trait]
impl AliasStore for PgAliasStore {
    async fn save(&self, target: &str, alias: &str) -> Result<(), StoreError> {
        if target.is_empty() {
            return Err(StoreError::EmptyTarget {
                alias: alias.to_string(),
            });
        }

        sqlx::query("INSERT INTO url (url, alias) VALUES ($1, $2)")
            .bind(target)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_alias_violation(&e) {
                    StoreError::AliasExists {
                        alias: alias.to_string(),
                    }
                } else {
                    StoreError::Backend(e)
                }
            })?;

        Ok(())
    }

    async fn get(&self, alias: &str) -> Result<String, StoreError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        url.ok_or_else(|| StoreError::NotFound {
            alias: alias.to_string(),
        })
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        debug!(alias, rows = result.rows_affected(), "Alias delete executed");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
