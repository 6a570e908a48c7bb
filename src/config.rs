//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Database
//!
//! ```bash
//! export DB_HOST="localhost"
//! export DB_PORT="5432"
//! export DB_USER="postgres"
//! export DB_PASSWORD="password"
//! export DB_NAME="aliases"
//! ```
//!
//! The settings are handed to the store constructor as a [`DatabaseSettings`];
//! the store never reads the environment itself.
//!
//! ## Required Variables
//!
//! - `DB_USER`, `DB_PASSWORD`, `DB_NAME`
//! - `AUTH_USER`, `AUTH_PASSWORD` - Basic auth account for creating and deleting aliases
//!
//! ## Optional Variables
//!
//! - `DB_HOST` (default: `localhost`), `DB_PORT` (default: `5432`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`, `DB_MAX_LIFETIME`
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Connection settings for the relational backend.
#[derive(Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}

/// Connection pool tuning.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub max_connections: u32,
    /// Timeout for acquiring a connection in seconds (`DB_CONNECT_TIMEOUT`, default: 30).
    pub connect_timeout: u64,
    /// Idle connection lifetime in seconds (`DB_IDLE_TIMEOUT`, default: 600).
    pub idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub max_lifetime: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
        }
    }
}

/// The single basic-auth account guarding mutating routes.
#[derive(Clone)]
pub struct AuthCredentials {
    pub user: String,
    pub password: String,
}

impl AuthCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Returns `true` if the given pair matches the configured account.
    pub fn matches(&self, user: &str, password: Option<&str>) -> bool {
        self.user == user && password == Some(self.password.as_str())
    }
}

impl std::fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseSettings,
    pub pool: PoolSettings,
    pub auth: AuthCredentials,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a number does not parse.
    pub fn from_env() -> Result<Self> {
        let database =
            Self::load_database_settings().context("Failed to load database configuration")?;
        let pool = Self::load_pool_settings()?;

        let auth = AuthCredentials::new(
            env::var("AUTH_USER").context("AUTH_USER must be set")?,
            env::var("AUTH_PASSWORD").context("AUTH_PASSWORD must be set")?,
        );

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database,
            pool,
            auth,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Loads database connection settings from `DB_*` variables.
    fn load_database_settings() -> Result<DatabaseSettings> {
        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT")
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .context("DB_PORT must be a valid port number")?
            .unwrap_or(5432);
        let user = env::var("DB_USER").context("DB_USER must be set")?;
        let password = env::var("DB_PASSWORD").context("DB_PASSWORD must be set")?;
        let name = env::var("DB_NAME").context("DB_NAME must be set")?;

        Ok(DatabaseSettings {
            host,
            port,
            user,
            password,
            name,
        })
    }

    fn load_pool_settings() -> Result<PoolSettings> {
        let defaults = PoolSettings::default();

        Ok(PoolSettings {
            max_connections: parse_var("DB_MAX_CONNECTIONS")?.unwrap_or(defaults.max_connections),
            connect_timeout: parse_var("DB_CONNECT_TIMEOUT")?.unwrap_or(defaults.connect_timeout),
            idle_timeout: parse_var("DB_IDLE_TIMEOUT")?.unwrap_or(defaults.idle_timeout),
            max_lifetime: parse_var("DB_MAX_LIFETIME")?.unwrap_or(defaults.max_lifetime),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - the database host or name is empty
    /// - the basic auth user or password is empty
    /// - pool limits are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.database.host.is_empty() {
            anyhow::bail!("DB_HOST must not be empty");
        }
        if self.database.name.is_empty() {
            anyhow::bail!("DB_NAME must not be empty");
        }

        if self.auth.user.is_empty() || self.auth.password.is_empty() {
            anyhow::bail!("AUTH_USER and AUTH_PASSWORD must not be empty");
        }

        if self.pool.max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.pool.connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without passwords).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Database: {}@{}:{}/{}",
            self.database.user,
            self.database.host,
            self.database.port,
            self.database.name
        );
        tracing::info!("  Pool max connections: {}", self.pool.max_connections);
        tracing::info!("  Auth user: {}", self.auth.user);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads and parses an optional numeric variable.
fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(key)
        .ok()
        .map(|v| v.parse::<T>())
        .transpose()
        .with_context(|| format!("{key} must be a number"))
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            database: DatabaseSettings {
                host: "localhost".to_string(),
                port: 5432,
                user: "postgres".to_string(),
                password: "secret".to_string(),
                name: "aliases".to_string(),
            },
            pool: PoolSettings::default(),
            auth: AuthCredentials::new("admin", "secret"),
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    fn clear_db_vars() {
        // SAFETY: callers are #[serial]
        unsafe {
            for key in ["DB_HOST", "DB_PORT", "DB_USER", "DB_PASSWORD", "DB_NAME"] {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:8080".to_string();
        config.auth.password = String::new();
        assert!(config.validate().is_err());

        config.auth.password = "secret".to_string();
        config.pool.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_output_hides_passwords() {
        let config = test_config();
        let debug = format!("{config:?}");

        assert!(!debug.contains("secret"));
        assert!(debug.contains("admin"));
    }

    #[test]
    fn test_credentials_match() {
        let auth = AuthCredentials::new("admin", "secret");

        assert!(auth.matches("admin", Some("secret")));
        assert!(!auth.matches("admin", Some("wrong")));
        assert!(!auth.matches("admin", None));
        assert!(!auth.matches("other", Some("secret")));
    }

    #[test]
    #[serial]
    fn test_load_database_settings_from_components() {
        clear_db_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DB_HOST", "testhost");
            env::set_var("DB_PORT", "5433");
            env::set_var("DB_USER", "testuser");
            env::set_var("DB_PASSWORD", "testpass");
            env::set_var("DB_NAME", "testdb");
        }

        let settings = Config::load_database_settings().unwrap();

        assert_eq!(settings.host, "testhost");
        assert_eq!(settings.port, 5433);
        assert_eq!(settings.user, "testuser");
        assert_eq!(settings.password, "testpass");
        assert_eq!(settings.name, "testdb");

        clear_db_vars();
    }

    #[test]
    #[serial]
    fn test_database_defaults_and_required_fields() {
        clear_db_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_USER", "u");
            env::set_var("DB_PASSWORD", "p");
        }

        assert!(Config::load_database_settings().is_err());

        unsafe {
            env::set_var("DB_NAME", "n");
        }
        let settings = Config::load_database_settings().unwrap();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 5432);

        unsafe {
            env::set_var("DB_PORT", "not-a-port");
        }
        assert!(Config::load_database_settings().is_err());

        clear_db_vars();
    }

    #[test]
    #[serial]
    fn test_pool_settings_parse() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_MAX_CONNECTIONS", "25");
            env::remove_var("DB_IDLE_TIMEOUT");
        }

        let pool = Config::load_pool_settings().unwrap();
        assert_eq!(pool.max_connections, 25);
        assert_eq!(pool.idle_timeout, 600);

        unsafe {
            env::set_var("DB_MAX_CONNECTIONS", "many");
        }
        assert!(Config::load_pool_settings().is_err());

        unsafe {
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }
}
