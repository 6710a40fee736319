//! Shared application state.

use sea_orm::DatabaseConnection;

/// State shared with every request handler.
///
/// Built once at startup and injected through axum's `State` extractor; cloning only
/// clones the connection pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
