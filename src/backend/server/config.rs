/**
 * Server Configuration
 *
 * Configuration is read once at startup from environment variables (a
 * `.env` file is loaded first by the binary) and then passed explicitly into
 * the components that need it.
 *
 * # Variables
 *
 * - `JWT_SECRET_KEY` - token signing secret (required)
 * - `DATABASE_URL` - PostgreSQL URL; without it users are kept in memory,
 *   with it startup fails if the database is unreachable
 * - `SERVER_PORT` - listen port (default 5000)
 * - `UPLOAD_DIR` - profile picture directory (default `uploads`)
 * - `BCRYPT_COST` - bcrypt work factor (default 10)
 */

use std::path::PathBuf;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::backend::auth::passwords::DEFAULT_BCRYPT_COST;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// How long startup waits for the first database connection
const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Work factors accepted by bcrypt
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Optional PostgreSQL connection URL
    pub database_url: Option<String>,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .field("upload_dir", &self.upload_dir)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(secret) = var("JWT_SECRET_KEY") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = var("SERVER_PORT") {
            let port = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: port.clone(),
            })?;
            builder = builder.port(port);
        }
        if let Some(dir) = var("UPLOAD_DIR") {
            builder = builder.upload_dir(dir);
        }
        if let Some(cost) = var("BCRYPT_COST") {
            let cost = cost.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: cost.clone(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }
        builder.build()
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    upload_dir: Option<PathBuf>,
    bcrypt_cost: Option<u32>,
}

impl ServerConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = Some(dir.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .ok_or(ConfigError::MissingValue("JWT_SECRET_KEY"))?;
        let bcrypt_cost = self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST);
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(ServerConfig {
            jwt_secret,
            database_url: self.database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
            upload_dir: self
                .upload_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            bcrypt_cost,
        })
    }
}

/// Database startup errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect to PostgreSQL and run migrations.
///
/// Returns `Ok(None)` only when no database is configured; the server then
/// keeps users in memory. A configured database that cannot be reached or
/// migrated is an error, never a silent fallback.
pub async fn load_database(config: &ServerConfig) -> Result<Option<PgPool>, DatabaseError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Users will be kept in memory only.");
        return Ok(None);
    };

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .acquire_timeout(DB_ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            e
        })?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Some(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("JWT_SECRET_KEY", "s3cret")])).unwrap();
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_secret_required() {
        let err = ServerConfig::from_lookup(lookup(&[("SERVER_PORT", "8080")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("JWT_SECRET_KEY"));

        let err = ServerConfig::from_lookup(lookup(&[("JWT_SECRET_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("JWT_SECRET_KEY"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET_KEY", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/fintrack"),
            ("SERVER_PORT", "8080"),
            ("UPLOAD_DIR", "/var/lib/fintrack/uploads"),
            ("BCRYPT_COST", "12"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/fintrack"));
        assert_eq!(config.upload_dir, PathBuf::from("/var/lib/fintrack/uploads"));
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET_KEY", "s3cret"),
            ("SERVER_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "SERVER_PORT", .. }));

        let err = ServerConfig::builder().jwt_secret("s").bcrypt_cost(2).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "BCRYPT_COST", .. }));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ServerConfig::builder()
            .jwt_secret("super-secret")
            .database_url("postgres://user:pw@localhost/db")
            .build()
            .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("user:pw"));
    }
}
