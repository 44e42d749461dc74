//! Database schema and connection management

use crate::{DatabaseError, Result, StoreConfig};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection wrapper
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to the store and make sure the schema exists.
    ///
    /// The pool is opened eagerly so an unreachable store fails startup
    /// instead of surfacing on the first request.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.dbname);

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(DatabaseError::Connection)?;

        let db = Self { pool };
        db.ensure_schema().await?;

        info!("Database connected: {}:{}/{}", config.host, config.port, config.dbname);
        Ok(db)
    }

    /// Wrap an existing pool (used by integration tests).
    pub async fn from_pool(pool: PgPool) -> Result<Self> {
        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip liveness probe against the store.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create any missing catalog tables.
    ///
    /// Catalog rows are seeded by an external process; this only guarantees
    /// the tables exist so the comment endpoint has somewhere to write.
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))?;

        Ok(())
    }
}

const SCHEMA: &str = r#"
-- Languages
CREATE TABLE IF NOT EXISTS language (
    language_id SERIAL PRIMARY KEY,
    name TEXT NOT NULL
);

-- Films
CREATE TABLE IF NOT EXISTS film (
    film_id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    release_year INTEGER,
    language_id INTEGER NOT NULL REFERENCES language(language_id),
    rental_duration INTEGER NOT NULL DEFAULT 3,
    rental_rate DOUBLE PRECISION NOT NULL DEFAULT 4.99,
    length INTEGER,
    replacement_cost DOUBLE PRECISION NOT NULL DEFAULT 19.99,
    rating TEXT,
    special_features TEXT
);

-- Categories
CREATE TABLE IF NOT EXISTS category (
    category_id SERIAL PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS film_category (
    film_id INTEGER NOT NULL REFERENCES film(film_id),
    category_id INTEGER NOT NULL REFERENCES category(category_id),
    PRIMARY KEY (film_id, category_id)
);

-- Actors
CREATE TABLE IF NOT EXISTS actor (
    actor_id SERIAL PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS film_actor (
    actor_id INTEGER NOT NULL REFERENCES actor(actor_id),
    film_id INTEGER NOT NULL REFERENCES film(film_id),
    PRIMARY KEY (actor_id, film_id)
);

-- Customers
CREATE TABLE IF NOT EXISTS customer (
    customer_id SERIAL PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
);

-- Comments (the one table this system writes to)
CREATE TABLE IF NOT EXISTS comment (
    comment_id SERIAL PRIMARY KEY,
    comment TEXT NOT NULL,
    customer_id INTEGER NOT NULL REFERENCES customer(customer_id),
    film_id INTEGER NOT NULL REFERENCES film(film_id)
);

CREATE INDEX IF NOT EXISTS idx_comment_film_customer
    ON comment(film_id, customer_id);
"#;
