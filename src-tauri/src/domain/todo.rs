//! Todo Entity
//!
//! A single task with a title and a completion flag.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, DomainError, DomainResult};

/// A todo item
///
/// `id` stays `None` until the row has been inserted; the database
/// assigns it and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier (assigned by the database)
    pub id: Option<u32>,
    /// Task title
    pub title: String,
    /// Completion status
    pub completed: bool,
    /// Creation time, Unix seconds
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Todo {
    /// Create a new, unsaved todo stamped with the current time
    pub fn new(title: String) -> Self {
        Self {
            id: None,
            title,
            completed: false,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Normalize a user-supplied title
    pub fn validate_title(title: &str) -> DomainResult<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("title must not be empty".to_string()));
        }
        Ok(trimmed.to_string())
    }

    /// Whether the todo has been written to the database
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new("Buy milk".to_string());
        assert_eq!(todo.id(), None);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert!(!todo.is_persisted());
        assert!(todo.created_at > 0);
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(Todo::validate_title("  Walk dog \n").unwrap(), "Walk dog");
        assert!(matches!(Todo::validate_title("   "), Err(DomainError::InvalidInput(_))));
        assert!(Todo::validate_title("").is_err());
    }

    #[test]
    fn test_serializes_created_at_in_camel_case() {
        let todo = Todo {
            id: Some(1),
            title: "Ship".to_string(),
            completed: true,
            created_at: 1_700_000_000,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["createdAt"], 1_700_000_000);
        assert_eq!(json["id"], 1);
        assert!(json.get("created_at").is_none());

        let unsaved: Todo = serde_json::from_str(r#"{"title":"x","completed":false,"createdAt":5}"#).unwrap();
        assert_eq!(unsaved.id, None);
    }
}
