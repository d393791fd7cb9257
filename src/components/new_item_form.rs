//! New Item Form Component
//!
//! Form for adding items to the active list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::use_app_store;

/// Form for adding a new item to the active list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }

        // The store guards blank text again; the guard above only keeps
        // the input from being cleared on a rejected submit.
        if let Some(id) = store.add_item(&text) {
            set_new_text.set(String::new());
            ctx.flash_item(id);
        }
    };

    let next_ordinal = move || store.snapshot().visible_items().len() + 1;

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button
                type="submit"
                disabled=move || new_text.get().trim().is_empty()
            >
                {move || format!("Add #{}", next_ordinal())}
            </button>
        </form>
    }
}
