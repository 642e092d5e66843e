//! Todo Row Component
//!
//! A single todo: completion checkbox, title (double-click to rename)
//! and delete button. Fields are read from the store by id, so backend
//! replies update the row without remounting it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::commands;
use crate::notify;
use crate::store::{store_remove_todo, store_update_todo, use_app_store, AppStateStoreFields};
use crate::todos::find_todo;

#[component]
pub fn TodoRow(id: u32) -> impl IntoView {
    let store = use_app_store();

    let todo = Memo::new(move |_| find_todo(&store.todos().read(), id).cloned());
    let completed = move || todo.with(|t| t.as_ref().is_some_and(|t| t.completed));
    let title = move || todo.with(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default());

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let toggle = move |ev: web_sys::Event| {
        let checkbox = event_target::<HtmlInputElement>(&ev);
        spawn_local(async move {
            match commands::toggle_completed(id).await {
                Ok(updated) => store_update_todo(&store, updated),
                Err(e) => {
                    // Store still holds the last confirmed state
                    let stored = store
                        .todos()
                        .with_untracked(|todos| find_todo(todos, id).map(|t| t.completed));
                    checkbox.set_checked(stored.unwrap_or(!checkbox.checked()));
                    notify::alert_error("toggle_completed", &e);
                }
            }
        });
    };

    let delete = move |_| {
        spawn_local(async move {
            match commands::delete_todo(id).await {
                Ok(()) => store_remove_todo(&store, id),
                Err(e) => notify::alert_error("delete_todo", &e),
            }
        });
    };

    let start_edit = move |_| {
        set_draft.set(todo.with_untracked(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default()));
        set_editing.set(true);
    };

    let save = move || {
        set_editing.set(false);
        let new_title = draft.get_untracked();
        let new_title = new_title.trim().to_string();
        let unchanged = todo.with_untracked(|t| t.as_ref().is_some_and(|t| t.title == new_title));
        if new_title.is_empty() || unchanged { return; }

        spawn_local(async move {
            match commands::update_todo(id, Some(&new_title), None).await {
                Ok(updated) => store_update_todo(&store, updated),
                Err(e) => notify::alert_error("update_todo", &e),
            }
        });
    };

    view! {
        <li class=move || if completed() { "todo-row completed" } else { "todo-row" }>
            <input type="checkbox" prop:checked=completed on:change=toggle />
            {move || if editing.get() {
                view! {
                    <input
                        class="edit-input"
                        type="text"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => save(),
                            "Escape" => set_editing.set(false),
                            _ => {}
                        }
                        on:blur=move |_| {
                            if editing.get_untracked() { save() }
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <span class="todo-title" on:dblclick=start_edit>{title}</span>
                }.into_any()
            }}
            <button class="delete-btn" title="Delete" on:click=delete>"❌"</button>
        </li>
    }
}
