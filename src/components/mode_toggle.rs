//! Mode Toggle Component
//!
//! All / Active / Completed filter buttons.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_mode::ViewMode;

#[component]
pub fn ModeToggle() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="mode-toggle-row">
            <div class="mode-toggle">
                {ViewMode::ALL.into_iter().map(|mode| {
                    let is_active = move || store.view_mode().get() == mode;
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "mode-btn active" } else { "mode-btn" }
                            on:click=move |_| store.view_mode().set(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
