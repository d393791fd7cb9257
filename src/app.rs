//! Listpad Frontend App
//!
//! Main application component: list tabs on top, item editor below.

use leptos::prelude::*;

use crate::components::{ClearDoneButton, ItemList, ListTabBar, NewItemForm};
use crate::context::AppContext;
use crate::store::AppStore;

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new();
    let flashed_item = signal::<Option<u64>>(None);

    // Provide store and context to all children
    provide_context(store);
    provide_context(AppContext::new(flashed_item));

    let item_count = move || store.snapshot().visible_items().len();
    let list_count = move || store.snapshot().lists.len();

    view! {
        <div class="app-layout">
            <ListTabBar />

            <main class="main-content">
                <h1>"Listpad"</h1>

                <NewItemForm />

                <ItemList />

                <div class="list-footer">
                    <ClearDoneButton />
                    <p class="item-count">
                        {move || format!("{} items, {} lists", item_count(), list_count())}
                    </p>
                </div>
            </main>
        </div>
    }
}
