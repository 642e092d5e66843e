//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Option<u32>,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}
