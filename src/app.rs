//! Tasks Frontend App
//!
//! Waits for the backend database, loads all todos once, then renders
//! the form and list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NewTodoForm, TodoList};
use crate::notify;
use crate::store::{store_set_todos, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let load_todos = move || {
        spawn_local(async move {
            match commands::get_all_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", loaded.len()).into());
                    store_set_todos(&store, loaded);
                }
                Err(e) => notify::log_error("get_all_todos", &e),
            }
            store.db_ready().set(true);
        });
    };

    // Subscribe before asking, so an init finishing in between is not missed
    spawn_local(async move {
        if let Err(e) = commands::on_db_initialized(load_todos).await {
            notify::log_error("listen", &e);
        }
        match commands::db_ready().await {
            Ok(true) => load_todos(),
            Ok(false) => web_sys::console::log_1(&"[APP] Waiting for database...".into()),
            Err(e) => notify::log_error("db_ready", &e),
        }
    });

    view! {
        <Show
            when=move || store.db_ready().get()
            fallback=|| view! {
                <main class="container loading">
                    <p class="muted">"Loading..."</p>
                </main>
            }
        >
            <main class="container">
                <h2>"Tasks"</h2>
                <NewTodoForm />
                <TodoList />
            </main>
        </Show>
    }
}
