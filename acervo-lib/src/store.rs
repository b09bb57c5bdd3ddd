//! Store handles injected into [`crate::CatalogService`].
//!
//! A store hands out a connection for the duration of one operation; nothing
//! holds a process-wide connection.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;

use crate::ServiceError;

/// Source of scoped database connections.
pub trait CatalogStore {
    /// Run `f` with a connection acquired for this call and released after it.
    fn with_connection<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Connection) -> Result<T, ServiceError>;
}

/// File-backed store. Opens a fresh connection for every operation.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Create (if needed) the database at `path` and its schema.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let path = path.into();
        acervo_db::open_database(&path)?;
        log::debug!("Catalog store ready at {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for SqliteStore {
    fn with_connection<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Connection) -> Result<T, ServiceError>,
    {
        let conn = Connection::open(&self.path)?;
        f(&conn)
    }
}

/// In-memory store for tests and throwaway sessions.
pub struct MemoryStore {
    conn: Mutex<Connection>,
}

impl MemoryStore {
    pub fn new() -> Result<Self, ServiceError> {
        Ok(Self {
            conn: Mutex::new(acervo_db::open_memory()?),
        })
    }
}

impl CatalogStore for MemoryStore {
    fn with_connection<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Connection) -> Result<T, ServiceError>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        f(&conn)
    }
}
