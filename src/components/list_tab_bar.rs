//! List Tab Bar Component
//!
//! Tab bar for switching between lists above the item editor. A tab is
//! activated by click, renamed through a double-click inline form, and
//! deleted through an inline confirm button. Deleting the last remaining
//! list is refused by the store, so its tab hides the delete button.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::TodoList;
use crate::store::use_app_store;

/// List Tab Bar component
#[component]
pub fn ListTabBar() -> impl IntoView {
    let store = use_app_store();

    // Which tab is in inline-rename mode
    let (renaming, set_renaming) = signal::<Option<u32>>(None);
    let (rename_text, set_rename_text) = signal(String::new());

    let lists = move || store.snapshot().lists;
    let only_one_list = move || store.snapshot().lists.len() == 1;

    let on_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(id) = renaming.get() {
            store.rename_list(id, &rename_text.get());
        }
        set_renaming.set(None);
        set_rename_text.set(String::new());
    };

    view! {
        <div class="list-tab-bar">
            <For
                each=lists
                key=|list| (list.id, list.name.clone(), list.active)
                children=move |list: TodoList| {
                    let id = list.id;
                    let is_active = list.active;
                    let name = list.name.clone();
                    let current_name = list.name.clone();
                    let tab_class = if is_active { "list-tab active" } else { "list-tab" };
                    let label = if name.is_empty() { "untitled".to_string() } else { name };

                    view! {
                        <Show
                            when=move || renaming.get() == Some(id)
                            fallback=move || {
                                let label = label.clone();
                                let prefill = current_name.clone();
                                view! {
                                    <span class="list-tab-wrapper">
                                        <button
                                            class=tab_class
                                            on:click=move |_| store.set_active_list(id)
                                            on:dblclick=move |_| {
                                                set_rename_text.set(prefill.clone());
                                                set_renaming.set(Some(id));
                                            }
                                        >
                                            {label}
                                        </button>
                                        <Show when=move || !only_one_list()>
                                            <DeleteConfirmButton
                                                button_class="list-delete-btn"
                                                on_confirm=move || store.delete_list(id)
                                            />
                                        </Show>
                                    </span>
                                }
                            }
                        >
                            <form class="list-rename-form" on:submit=on_rename>
                                <input
                                    type="text"
                                    placeholder="List name"
                                    prop:value=move || rename_text.get()
                                    on:input=move |ev| set_rename_text.set(event_target_value(&ev))
                                />
                                <button type="submit">"✓"</button>
                                <button type="button" on:click=move |_| set_renaming.set(None)>"✗"</button>
                            </form>
                        </Show>
                    }
                }
            />

            <button
                class="list-add-btn"
                on:click=move |_| { store.add_list(); }
            >
                "+"
            </button>
        </div>
    }
}
