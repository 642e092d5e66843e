//! Tauri Commands for Todo CRUD
//!
//! Exposes Todo operations to the frontend via Tauri IPC.

use tauri::State;
use crate::domain::Todo;
use crate::repository::Repository;
use crate::AppState;

/// Create a new todo
#[tauri::command]
pub async fn create_todo(
    state: State<'_, AppState>,
    title: String,
    completed: Option<bool>,
) -> Result<Todo, String> {
    let mut todo = Todo::new(title);
    todo.completed = completed.unwrap_or(false);

    let created = state.todo_repo.create(&todo).await.map_err(|e| {
        log::error!("event=todo_create status=error error={}", e);
        e.to_string()
    })?;
    log::info!("event=todo_create status=ok id={:?}", created.id);
    Ok(created)
}

/// List all todos
#[tauri::command]
pub async fn get_all_todos(state: State<'_, AppState>) -> Result<Vec<Todo>, String> {
    state.todo_repo.list().await.map_err(|e| e.to_string())
}

/// Delete a todo
#[tauri::command]
pub async fn delete_todo(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.todo_repo.delete(id).await.map_err(|e| {
        log::error!("event=todo_delete status=error id={} error={}", id, e);
        e.to_string()
    })?;
    log::info!("event=todo_delete status=ok id={}", id);
    Ok(())
}

/// Toggle todo completion status
#[tauri::command]
pub async fn toggle_completed(state: State<'_, AppState>, id: u32) -> Result<Todo, String> {
    state.todo_repo.toggle_completed(id).await.map_err(|e| {
        log::error!("event=todo_toggle status=error id={} error={}", id, e);
        e.to_string()
    })
}

/// Update title and/or completion of a todo
#[tauri::command]
pub async fn update_todo(
    state: State<'_, AppState>,
    id: u32,
    title: Option<String>,
    completed: Option<bool>,
) -> Result<Todo, String> {
    state
        .todo_repo
        .update_fields(id, title.as_deref(), completed)
        .await
        .map_err(|e| e.to_string())
}

/// Whether background database initialization has finished
#[tauri::command]
pub async fn db_ready(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.db_state.is_ready().await)
}
