//! Todo Repository
//!
//! SQLite-backed implementation of Repository<Todo>.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Entity, Todo, DomainError, DomainResult};
use super::traits::Repository;

/// SQLite implementation of Todo repository
pub struct TodoRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl TodoRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Flip the completion flag in one statement and return the stored row
    pub async fn toggle_completed(&self, id: u32) -> DomainResult<Todo> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.query_row(
            "UPDATE todos SET completed = NOT completed WHERE id = ?1
             RETURNING id, title, completed, created_at",
            params![id],
            row_to_todo,
        )
        .optional()?
        .ok_or_else(|| not_found(id))
    }

    /// Change only the given fields in one statement and return the stored row
    ///
    /// `None` leaves the column as it is in the database, so a concurrent
    /// toggle is never overwritten by a rename.
    pub async fn update_fields(
        &self,
        id: u32,
        title: Option<&str>,
        completed: Option<bool>,
    ) -> DomainResult<Todo> {
        let title = title.map(Todo::validate_title).transpose()?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.query_row(
            "UPDATE todos SET title = COALESCE(?1, title), completed = COALESCE(?2, completed)
             WHERE id = ?3
             RETURNING id, title, completed, created_at",
            params![title, completed, id],
            row_to_todo,
        )
        .optional()?
        .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        if entity.is_persisted() {
            return Err(DomainError::Conflict("todo already has an id".to_string()));
        }
        let title = Todo::validate_title(&entity.title)?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let todo = conn.query_row(
            "INSERT INTO todos (title, completed, created_at) VALUES (?1, ?2, ?3)
             RETURNING id, title, completed, created_at",
            params![title, entity.completed, entity.created_at],
            row_to_todo,
        )?;
        Ok(todo)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let todo = conn
            .query_row(
                "SELECT id, title, completed, created_at FROM todos WHERE id = ?1",
                params![id],
                row_to_todo,
            )
            .optional()?;
        Ok(todo)
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn.prepare(
            "SELECT id, title, completed, created_at FROM todos ORDER BY created_at ASC, id ASC",
        )?;
        let todos = stmt
            .query_map([], row_to_todo)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let id = entity
            .id()
            .ok_or_else(|| DomainError::InvalidInput("cannot update an unsaved todo".to_string()))?;
        let title = Todo::validate_title(&entity.title)?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.query_row(
            "UPDATE todos SET title = ?1, completed = ?2 WHERE id = ?3
             RETURNING id, title, completed, created_at",
            params![title, entity.completed, id],
            row_to_todo,
        )
        .optional()?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let affected = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_initialized() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

fn not_found(id: u32) -> DomainError {
    DomainError::NotFound(format!("Todo {}", id))
}

/// Convert a database row to Todo
fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
    })
}
