//! Schema migrations
//!
//! Applied in order inside one transaction; the applied version is
//! mirrored to `PRAGMA user_version`.

use rusqlite::Connection;

use crate::domain::{DomainError, DomainResult};

struct Migration {
    version: u32,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "create_todos_table",
        sql: "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );",
    },
    Migration {
        version: 2,
        description: "index_todos_created_at",
        sql: "CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos(created_at);",
    },
];

/// Latest schema version this binary knows about
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |m| m.version)
}

/// Apply all pending migrations
pub(super) fn apply_migrations(conn: &mut Connection) -> DomainResult<()> {
    let current: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    let latest = latest_version();

    if current > latest {
        return Err(DomainError::Conflict(format!(
            "database schema version {} is newer than supported version {}",
            current, latest
        )));
    }

    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        log::info!(
            "event=db_migrate module=db version={} description={}",
            migration.version, migration.description
        );
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}
