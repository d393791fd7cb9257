//! Application State Store
//!
//! Wraps the snapshot core in a Leptos signal. Each dispatch swaps the
//! whole snapshot in one `update`, so rapid repeated UI input is
//! serialized and no partially applied state is ever rendered.

use leptos::prelude::*;

use crate::state::TodoState;

/// Reactive handle over the state core; the only mutation entry point
/// for the view layer
#[derive(Clone, Copy)]
pub struct AppStore {
    state: RwSignal<TodoState>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(TodoState::new()),
        }
    }

    /// Current snapshot (reactive read)
    pub fn snapshot(&self) -> TodoState {
        self.state.get()
    }

    // ========================
    // List directory dispatches
    // ========================

    /// Add a list and return its id (the new active list)
    pub fn add_list(&self) -> u32 {
        self.state.update(|s| *s = s.add_list());
        let id = self.state.with_untracked(|s| s.active_list().id);
        web_sys::console::log_1(&format!("[STORE] added list {}", id).into());
        id
    }

    pub fn rename_list(&self, id: u32, name: &str) {
        self.state.update(|s| *s = s.rename_list(id, name));
    }

    pub fn set_active_list(&self, id: u32) {
        self.state.update(|s| *s = s.set_active_list(id));
    }

    pub fn delete_list(&self, id: u32) {
        self.state.update(|s| *s = s.delete_list(id));
        web_sys::console::log_1(&format!("[STORE] deleted list {}", id).into());
    }

    // ========================
    // Item editor dispatches
    // ========================

    /// Add an item to the active list; returns the new item's id, or
    /// `None` when the text was rejected
    pub fn add_item(&self, text: &str) -> Option<u64> {
        let before = self.state.with_untracked(|s| s.items.len());
        self.state.update(|s| *s = s.add_item(text));
        self.state.with_untracked(|s| {
            if s.items.len() > before {
                s.items.last().map(|i| i.id)
            } else {
                None
            }
        })
    }

    pub fn toggle_done(&self, id: u64) {
        self.state.update(|s| *s = s.toggle_done(id));
    }

    pub fn delete_item(&self, id: u64) {
        self.state.update(|s| *s = s.delete_item(id));
    }

    pub fn delete_done_items(&self) {
        self.state.update(|s| *s = s.delete_done_items());
        web_sys::console::log_1(&"[STORE] cleared done items".into());
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
