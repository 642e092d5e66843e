//! Database Connection and Setup
//!
//! Manages the SQLite connection shared by all repositories.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::domain::DomainError;
use super::migrations::apply_migrations;

/// Database state wrapper
///
/// Created empty so it can be managed before the connection exists;
/// the connection is installed once background initialization finishes.
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
    db_path: PathBuf,
}

impl DbState {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
            db_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Whether a connection has been installed
    pub async fn is_ready(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    /// Install an opened connection, replacing any previous one
    pub async fn install(&self, conn: Connection) {
        *self.conn.lock().await = Some(conn);
    }
}

/// Open a SQLite database and bring its schema up to date
pub fn open_connection(db_path: &Path) -> Result<Connection, String> {
    let started_at = Instant::now();
    log::info!("event=db_open module=db status=start path={}", db_path.display());

    let mut conn = Connection::open(db_path)
        .map_err(|e| format!("Failed to open db: {}", e))?;

    conn.busy_timeout(Duration::from_secs(5))
        .map_err(|e| format!("Failed to set busy timeout: {}", e))?;

    apply_migrations(&mut conn)
        .map_err(|e| format!("Failed to migrate: {}", e))?;

    log::info!(
        "event=db_open module=db status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

impl From<rusqlite::Error> for DomainError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => DomainError::NotFound("no matching row".to_string()),
            other => DomainError::Internal(other.to_string()),
        }
    }
}
