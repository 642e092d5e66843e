//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod migrations;
mod todo_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{open_connection, DbState};
pub use todo_repo::TodoRepository;
