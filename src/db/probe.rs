//! Database handle interface used by the connectivity probe (`GET /test`).
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;
use crate::db::postgres::PgDatabase;

/// Result type for database probe operations.
pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error("{0}")]
    Backend(String),
}

/// A database handle that can be probed for liveness.
///
/// The probe only reads metadata; nothing here writes to the database.
/// Implementations must be cheap to share (`Arc<dyn DatabaseProbe>` inside `AppState`).
#[async_trait]
pub trait DatabaseProbe: Send + Sync + 'static {
    // Name of the database this handle points to, if known.
    fn name(&self) -> Option<String>;

    // False once `close` has run (the server is shutting down).
    fn is_initialized(&self) -> bool;

    // Up to `limit` collection (table) names, sorted by name.
    async fn list_collections(&self, limit: usize) -> DbResult<Vec<String>>;

    // Release connections; later probes see `is_initialized() == false`.
    async fn close(&self);
}

/// Where the database collaborator stands after startup.
#[derive(Clone)]
pub enum DatabaseSlot {
    /// `DATABASE_URL` is not configured.
    Missing,
    /// A URL is configured but the handle could not be created.
    Failed(String),
    Ready(Arc<dyn DatabaseProbe>),
}

impl DatabaseSlot {
    pub fn from_config(config: &Config) -> Self {
        let Some(url) = config.database_url.as_deref() else {
            return Self::Missing;
        };

        match PgDatabase::connect_lazy(url, config.database_name.clone()) {
            Ok(db) => Self::Ready(Arc::new(db)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to create database handle");
                Self::Failed(e.to_string())
            }
        }
    }

    pub async fn close(&self) {
        if let Self::Ready(db) = self {
            db.close().await;
        }
    }

    #[cfg(test)]
    pub fn ready(probe: impl DatabaseProbe) -> Self {
        Self::Ready(Arc::new(probe))
    }
}

impl fmt::Debug for DatabaseSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseSlot::Missing => f.write_str("Missing"),
            DatabaseSlot::Failed(e) => f.debug_tuple("Failed").field(e).finish(),
            DatabaseSlot::Ready(db) => f.debug_tuple("Ready").field(&db.name()).finish(),
        }
    }
}
