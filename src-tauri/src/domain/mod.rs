//! Domain Layer
//!
//! Contains the todo entity and core abstractions.
//! This layer has NO external dependencies (except serde and chrono).

mod entity;
mod todo;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo::Todo;
