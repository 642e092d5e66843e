//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod log_cmd;
mod todo_cmd;

pub use log_cmd::*;
pub use todo_cmd::*;
