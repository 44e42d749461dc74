//! Mockbuster Web API
//!
//! Axum-based HTTP gateway over the film rental catalog.

mod error;
mod handlers;
mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;

use mockbuster_database::Database;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

pub type SharedState = Arc<AppState>;
