//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod mode_toggle;
mod todo_list;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use mode_toggle::ModeToggle;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
