//! Item Row Component
//!
//! A single item row: done checkbox, text, delete button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::TodoItem;
use crate::store::use_app_store;

/// A single row in the item list
#[component]
pub fn ItemRow(item: TodoItem) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let done = item.done;
    let text = item.text.clone();

    let row_class = move || {
        let mut c = String::from(if done { "item-row done" } else { "item-row undone" });
        if ctx.flashed_item.get() == Some(id) {
            c.push_str(" highlight");
        }
        c
    };

    view! {
        <div class=row_class>
            <label class="item-check">
                <input
                    type="checkbox"
                    checked=done
                    on:change=move |_| store.toggle_done(id)
                />
                <span class="item-text">{text}</span>
            </label>

            <button class="delete-btn" on:click=move |_| store.delete_item(id)>"×"</button>
        </div>
    }
}
