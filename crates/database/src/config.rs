//! Store connection configuration

/// Connection settings for the catalog store, loaded once at startup.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in production.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store host (default: `localhost`).
    pub host: String,
    /// Store port (default: `5432`).
    pub port: u16,
    /// Store user (default: `postgres`).
    pub user: String,
    /// Store password (default: `postgres`).
    pub password: String,
    /// Database name (default: `dvdrental`).
    pub dbname: String,
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var       | Default     |
    /// |---------------|-------------|
    /// | `DB_HOST`     | `localhost` |
    /// | `DB_PORT`     | `5432`      |
    /// | `DB_USER`     | `postgres`  |
    /// | `DB_PASSWORD` | `postgres`  |
    /// | `DB_NAME`     | `dvdrental` |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port: u16 = std::env::var("DB_PORT")
            .ok()
            .map(|p| p.parse().expect("DB_PORT must be a valid u16"))
            .unwrap_or(defaults.port);

        Self {
            host: std::env::var("DB_HOST").unwrap_or(defaults.host),
            port,
            user: std::env::var("DB_USER").unwrap_or(defaults.user),
            password: std::env::var("DB_PASSWORD").unwrap_or(defaults.password),
            dbname: std::env::var("DB_NAME").unwrap_or(defaults.dbname),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            dbname: "dvdrental".to_string(),
        }
    }
}
