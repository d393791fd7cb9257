//! Clear Done Button Component
//!
//! Bulk delete of the active list's done items. Disabled when the active
//! list has no done items; the store rejects the dispatch in that case
//! anyway, so the disabled state is cosmetic, not the guard.

use leptos::prelude::*;

use crate::store::use_app_store;

/// Button clearing all done items of the active list
#[component]
pub fn ClearDoneButton() -> impl IntoView {
    let store = use_app_store();

    let has_done = move || store.snapshot().has_done_items();

    view! {
        <button
            class="clear-done-btn"
            disabled=move || !has_done()
            on:click=move |_| store.delete_done_items()
        >
            "Clear done"
        </button>
    }
}
