//! Todo List Utilities
//!
//! Patches the in-memory list with backend replies.

use crate::models::Todo;

/// Key of a rendered row. Only the id, so replies patch the row in place.
pub fn row_key(todo: &Todo) -> Option<u32> {
    todo.id
}

pub fn find_todo(todos: &[Todo], id: u32) -> Option<&Todo> {
    todos.iter().find(|todo| todo.id == Some(id))
}

/// Append a newly created todo; a reply for an id already present replaces it
pub fn append_todo(todos: &mut Vec<Todo>, todo: Todo) {
    if !replace_todo(todos, todo.clone()) {
        todos.push(todo);
    }
}

/// Replace the todo with the same id. Returns false if none matched.
pub fn replace_todo(todos: &mut [Todo], updated: Todo) -> bool {
    if updated.id.is_none() {
        return false;
    }
    match todos.iter_mut().find(|todo| todo.id == updated.id) {
        Some(todo) => {
            *todo = updated;
            true
        }
        None => false,
    }
}

/// Remove the todo with `id`. Returns false if none matched.
pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) -> bool {
    let before = todos.len();
    todos.retain(|todo| todo.id != Some(id));
    todos.len() != before
}

/// Number of todos not yet completed
pub fn count_active(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}
