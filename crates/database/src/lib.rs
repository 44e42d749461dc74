//! Mockbuster Database Layer
//!
//! PostgreSQL-backed storage for the film rental catalog.

mod config;
mod models;
mod queries;
mod schema;

pub use config::StoreConfig;
pub use models::*;
pub use schema::Database;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Store unreachable: {0}")]
    Connection(sqlx::Error),

    #[error("Query failed: {0}")]
    Query(sqlx::Error),

    #[error("Schema setup failed: {0}")]
    Migration(String),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        // Pool-level and I/O failures mean the store itself is gone;
        // everything else is a problem with the statement.
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DatabaseError::Connection(err)
            }
            other => DatabaseError::Query(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_exhaustion_classifies_as_connection_error() {
        let err: DatabaseError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DatabaseError::Connection(_)));

        let err: DatabaseError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DatabaseError::Connection(_)));
    }

    #[test]
    fn io_failure_classifies_as_connection_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: DatabaseError = sqlx::Error::Io(io).into();
        assert!(matches!(err, DatabaseError::Connection(_)));
    }

    #[test]
    fn statement_failure_classifies_as_query_error() {
        let err: DatabaseError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DatabaseError::Query(_)));

        let err: DatabaseError = sqlx::Error::ColumnNotFound("title".into()).into();
        assert!(matches!(err, DatabaseError::Query(_)));
    }
}
