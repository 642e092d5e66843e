//! Todo Commands
//!
//! Frontend bindings for todo-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Todo;
use super::{error_message, invoke};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    title: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct UpdateTodoArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
}

// ========================
// Commands
// ========================

pub async fn get_all_todos() -> Result<Vec<Todo>, String> {
    let result = invoke("get_all_todos", JsValue::NULL).await.map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_todo(title: &str, completed: bool) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateTodoArgs { title, completed }).map_err(|e| e.to_string())?;
    let result = invoke("create_todo", js_args).await.map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn toggle_completed(id: u32) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_completed", js_args).await.map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_todo(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_todo", js_args).await.map_err(error_message)?;
    Ok(())
}

pub async fn update_todo(id: u32, title: Option<&str>, completed: Option<bool>) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateTodoArgs { id, title, completed }).map_err(|e| e.to_string())?;
    let result = invoke("update_todo", js_args).await.map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Whether the backend has finished opening the database
pub async fn db_ready() -> Result<bool, String> {
    let result = invoke("db_ready", JsValue::NULL).await.map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
