//! View Mode
//!
//! Client-side filter over the todo list.

use crate::models::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    All,
    Active,
    Completed,
}

impl ViewMode {
    /// Display order of the toggle buttons
    pub const ALL: [ViewMode; 3] = [ViewMode::All, ViewMode::Active, ViewMode::Completed];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::All => "All",
            ViewMode::Active => "Active",
            ViewMode::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            ViewMode::All => true,
            ViewMode::Active => !todo.completed,
            ViewMode::Completed => todo.completed,
        }
    }
}

/// Todos visible under `mode`, in list order
pub fn filter_todos(todos: &[Todo], mode: ViewMode) -> Vec<Todo> {
    todos.iter().filter(|todo| mode.matches(todo)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u32, completed: bool) -> Todo {
        Todo {
            id: Some(id),
            title: format!("Todo {}", id),
            completed,
            created_at: id as i64,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<u32> {
        todos.iter().filter_map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_modes() {
        let todos = vec![todo(1, false), todo(2, true), todo(3, false)];

        assert_eq!(ids(&filter_todos(&todos, ViewMode::All)), vec![1, 2, 3]);
        assert_eq!(ids(&filter_todos(&todos, ViewMode::Active)), vec![1, 3]);
        assert_eq!(ids(&filter_todos(&todos, ViewMode::Completed)), vec![2]);
    }

    #[test]
    fn test_filter_empty_list() {
        for mode in ViewMode::ALL {
            assert!(filter_todos(&[], mode).is_empty());
        }
    }

    #[test]
    fn test_labels_and_default() {
        let labels: Vec<_> = ViewMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["All", "Active", "Completed"]);
        assert_eq!(ViewMode::default(), ViewMode::All);
    }
}
