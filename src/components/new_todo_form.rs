//! New Todo Form Component
//!
//! Text input plus submit button for creating todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::notify;
use crate::store::{store_add_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() || submitting.get() { return; }
        set_submitting.set(true);

        spawn_local(async move {
            match commands::create_todo(&title, false).await {
                Ok(todo) => store_add_todo(&store, todo),
                Err(e) => notify::log_error("create_todo", &e),
            }
            set_new_title.set(String::new());
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                name="title"
                placeholder="Add a new todo"
                autofocus=true
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || submitting.get()>"Add"</button>
        </form>
    }
}
