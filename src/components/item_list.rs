//! Item List Component
//!
//! Displays the active list's items in insertion order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::use_app_store;

/// Item list view for the active list
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    let visible = move || store.snapshot().visible_items();

    view! {
        <div class="item-list">
            <For
                each=visible
                // Key on the mutable fields so edits cause a re-render
                key=|item| (item.id, item.done, item.text.clone())
                children=move |item| {
                    view! { <ItemRow item=item /> }
                }
            />

            <Show when=move || visible().is_empty()>
                <p class="empty-hint">"Nothing here yet."</p>
            </Show>
        </div>
    }
}
