//! Backend Events
//!
//! Subscriptions to events emitted by the backend.

use wasm_bindgen::prelude::*;
use super::{error_message, listen};

/// Emitted once the backend database is open
pub const DB_INITIALIZED_EVENT: &str = "db-initialized";

/// Run `handler` every time the database-initialized event fires
pub async fn on_db_initialized(handler: impl Fn() + 'static) -> Result<(), String> {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| handler());
    listen(DB_INITIALIZED_EVENT, &closure).await.map_err(error_message)?;
    // Lives for the whole session
    closure.forget();
    Ok(())
}
