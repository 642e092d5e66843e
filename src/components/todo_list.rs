//! Todo List Component
//!
//! Renders the filtered list, or a placeholder when there are no todos.

use leptos::prelude::*;

use crate::components::{ModeToggle, TodoRow};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::todos::{count_active, row_key};
use crate::view_mode::filter_todos;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let is_empty = move || store.todos().read().is_empty();
    let visible = move || filter_todos(&store.todos().read(), store.view_mode().get());
    let summary = move || {
        let todos = store.todos().read();
        format!("{} of {} remaining", count_active(&todos), todos.len())
    };

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <div class="empty">
                    <p class="muted">"No todos yet."</p>
                </div>
            }
        >
            <ModeToggle />
            <ul class="todo-list">
                <For
                    each=visible
                    key=row_key
                    children=move |todo| todo.id.map(|id| view! { <TodoRow id=id /> })
                />
            </ul>
            <p class="muted todo-count">{summary}</p>
        </Show>
    }
}
