//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;
use crate::todos::{append_todo, remove_todo, replace_todo};
use crate::view_mode::ViewMode;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the backend rows
    pub todos: Vec<Todo>,
    /// Current list filter
    pub view_mode: ViewMode,
    /// Set once the initial load has finished
    pub db_ready: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list (initial load)
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    store.todos().set(todos);
}

/// Add a created todo to the store
pub fn store_add_todo(store: &AppStore, todo: Todo) {
    append_todo(&mut store.todos().write(), todo);
}

/// Update a todo in the store by ID
pub fn store_update_todo(store: &AppStore, updated: Todo) {
    replace_todo(&mut store.todos().write(), updated);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, todo_id: u32) {
    remove_todo(&mut store.todos().write(), todo_id);
}
