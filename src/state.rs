//! State Core
//!
//! Snapshot-based state for the multi-list widget. Every operation takes
//! the current snapshot by reference and returns the next one; nothing is
//! mutated in place, so a half-applied state is never observable.
//!
//! Invariants held by every snapshot these operations produce:
//! - exactly one list has `active = true`
//! - list ids and item ids are unique
//! - every item's `list_id` refers to an existing list

use crate::models::{TodoItem, TodoList};

/// Full application state: the two collections plus the item-id clock
#[derive(Debug, Clone, PartialEq)]
pub struct TodoState {
    pub lists: Vec<TodoList>,
    pub items: Vec<TodoItem>,
    /// Last issued item id; item ids are clock-derived and strictly increasing
    last_item_id: u64,
}

/// Millisecond wall clock for item ids
#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoState {
    /// Seed state: one empty-named list, active
    pub fn new() -> Self {
        Self {
            lists: vec![TodoList {
                id: 1,
                name: String::new(),
                active: true,
            }],
            items: Vec::new(),
            last_item_id: 0,
        }
    }

    // ========================
    // Derived queries
    // ========================

    /// The single active list
    pub fn active_list(&self) -> &TodoList {
        self.lists
            .iter()
            .find(|l| l.active)
            .expect("state always holds exactly one active list")
    }

    /// Items of the active list, in insertion order
    pub fn visible_items(&self) -> Vec<TodoItem> {
        let active_id = self.active_list().id;
        self.items
            .iter()
            .filter(|i| i.list_id == active_id)
            .cloned()
            .collect()
    }

    /// True iff the active list has at least one done item; gates the
    /// bulk delete
    pub fn has_done_items(&self) -> bool {
        let active_id = self.active_list().id;
        self.items.iter().any(|i| i.list_id == active_id && i.done)
    }

    // ========================
    // List directory operations
    // ========================

    /// Append a new list and make it the active one
    pub fn add_list(&self) -> TodoState {
        let id = self.lists.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let mut lists: Vec<TodoList> = self
            .lists
            .iter()
            .map(|l| TodoList {
                active: false,
                ..l.clone()
            })
            .collect();
        lists.push(TodoList {
            id,
            name: String::new(),
            active: true,
        });
        TodoState {
            lists,
            items: self.items.clone(),
            last_item_id: self.last_item_id,
        }
    }

    /// Set the name of the list with `id`; no-op on unknown id.
    /// An empty name is allowed.
    pub fn rename_list(&self, id: u32, name: &str) -> TodoState {
        let lists = self
            .lists
            .iter()
            .map(|l| {
                if l.id == id {
                    TodoList {
                        name: name.to_string(),
                        ..l.clone()
                    }
                } else {
                    l.clone()
                }
            })
            .collect();
        TodoState {
            lists,
            items: self.items.clone(),
            last_item_id: self.last_item_id,
        }
    }

    /// Switch the active list; idempotent, no-op on unknown id
    pub fn set_active_list(&self, id: u32) -> TodoState {
        if self.active_list().id == id || !self.lists.iter().any(|l| l.id == id) {
            return self.clone();
        }
        let lists = self
            .lists
            .iter()
            .map(|l| TodoList {
                active: l.id == id,
                ..l.clone()
            })
            .collect();
        TodoState {
            lists,
            items: self.items.clone(),
            last_item_id: self.last_item_id,
        }
    }

    /// Remove a list and cascade-delete its items. Refused when it is the
    /// only list. When the removed list was active, the list preceding it
    /// in display order takes over (the first list when it sat at
    /// position 0).
    pub fn delete_list(&self, id: u32) -> TodoState {
        if self.lists.len() <= 1 {
            return self.clone();
        }
        let Some(pos) = self.lists.iter().position(|l| l.id == id) else {
            return self.clone();
        };
        let was_active = self.lists[pos].active;

        let mut lists: Vec<TodoList> = self
            .lists
            .iter()
            .filter(|l| l.id != id)
            .cloned()
            .collect();
        if was_active {
            let successor = pos.saturating_sub(1);
            for (i, l) in lists.iter_mut().enumerate() {
                l.active = i == successor;
            }
        }
        let items = self
            .items
            .iter()
            .filter(|i| i.list_id != id)
            .cloned()
            .collect();
        TodoState {
            lists,
            items,
            last_item_id: self.last_item_id,
        }
    }

    // ========================
    // Item editor operations
    // ========================

    /// Append an item to the active list; refused for blank text
    pub fn add_item(&self, text: &str) -> TodoState {
        if text.trim().is_empty() {
            return self.clone();
        }
        let id = now_ms().max(self.last_item_id + 1);
        let mut items = self.items.clone();
        items.push(TodoItem {
            id,
            list_id: self.active_list().id,
            text: text.to_string(),
            done: false,
        });
        TodoState {
            lists: self.lists.clone(),
            items,
            last_item_id: id,
        }
    }

    /// Flip the done flag of the item with `id`; no-op on unknown id
    pub fn toggle_done(&self, id: u64) -> TodoState {
        let items = self
            .items
            .iter()
            .map(|i| {
                if i.id == id {
                    TodoItem {
                        done: !i.done,
                        ..i.clone()
                    }
                } else {
                    i.clone()
                }
            })
            .collect();
        TodoState {
            lists: self.lists.clone(),
            items,
            last_item_id: self.last_item_id,
        }
    }

    /// Remove the item with `id`; no-op on unknown id
    pub fn delete_item(&self, id: u64) -> TodoState {
        let items = self
            .items
            .iter()
            .filter(|i| i.id != id)
            .cloned()
            .collect();
        TodoState {
            lists: self.lists.clone(),
            items,
            last_item_id: self.last_item_id,
        }
    }

    /// Remove every done item of the active list; other lists' items are
    /// untouched. The `has_done_items` guard is checked here, not only at
    /// the button.
    pub fn delete_done_items(&self) -> TodoState {
        if !self.has_done_items() {
            return self.clone();
        }
        let active_id = self.active_list().id;
        let items = self
            .items
            .iter()
            .filter(|i| !(i.done && i.list_id == active_id))
            .cloned()
            .collect();
        TodoState {
            lists: self.lists.clone(),
            items,
            last_item_id: self.last_item_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(id: u32, name: &str, active: bool) -> TodoList {
        TodoList {
            id,
            name: name.to_string(),
            active,
        }
    }

    fn item(id: u64, list_id: u32, done: bool) -> TodoItem {
        TodoItem {
            id,
            list_id,
            text: format!("item {}", id),
            done,
        }
    }

    fn state(lists: Vec<TodoList>, items: Vec<TodoItem>) -> TodoState {
        let last_item_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        TodoState {
            lists,
            items,
            last_item_id,
        }
    }

    fn assert_invariants(s: &TodoState) {
        assert_eq!(
            s.lists.iter().filter(|l| l.active).count(),
            1,
            "exactly one active list"
        );
        let mut list_ids: Vec<u32> = s.lists.iter().map(|l| l.id).collect();
        list_ids.sort_unstable();
        list_ids.dedup();
        assert_eq!(list_ids.len(), s.lists.len(), "list ids unique");
        let mut item_ids: Vec<u64> = s.items.iter().map(|i| i.id).collect();
        item_ids.sort_unstable();
        item_ids.dedup();
        assert_eq!(item_ids.len(), s.items.len(), "item ids unique");
        for i in &s.items {
            assert!(
                s.lists.iter().any(|l| l.id == i.list_id),
                "item {} references existing list",
                i.id
            );
        }
    }

    #[test]
    fn seed_state_has_one_active_empty_list() {
        let s = TodoState::new();
        assert_eq!(s.lists.len(), 1);
        assert_eq!(s.lists[0].id, 1);
        assert!(s.lists[0].name.is_empty());
        assert!(s.lists[0].active);
        assert!(s.items.is_empty());
        assert_invariants(&s);
    }

    #[test]
    fn add_list_activates_the_new_list() {
        let s = TodoState::new().add_list();
        assert_eq!(s.lists.len(), 2);
        assert_eq!(s.lists[1].id, 2);
        assert!(s.lists[1].active);
        assert!(!s.lists[0].active);
        assert_invariants(&s);
    }

    #[test]
    fn add_list_ids_are_max_plus_one() {
        let s = state(
            vec![list(3, "a", false), list(7, "b", true)],
            vec![],
        );
        let s = s.add_list();
        assert_eq!(s.lists.last().unwrap().id, 8);
        assert_invariants(&s);
    }

    #[test]
    fn rename_list_sets_name_and_allows_empty() {
        let s = TodoState::new().rename_list(1, "groceries");
        assert_eq!(s.lists[0].name, "groceries");
        let s = s.rename_list(1, "");
        assert_eq!(s.lists[0].name, "");
    }

    #[test]
    fn rename_unknown_list_is_a_noop() {
        let s = TodoState::new();
        assert_eq!(s.rename_list(99, "ghost"), s);
    }

    #[test]
    fn set_active_list_switches_and_is_idempotent() {
        let s = TodoState::new().add_list();
        let once = s.set_active_list(1);
        assert!(once.lists[0].active);
        assert!(!once.lists[1].active);
        let twice = once.set_active_list(1);
        assert_eq!(once, twice);
        assert_invariants(&twice);
    }

    #[test]
    fn set_active_list_unknown_id_is_a_noop() {
        let s = TodoState::new().add_list();
        assert_eq!(s.set_active_list(42), s);
    }

    #[test]
    fn delete_last_remaining_list_is_refused() {
        let s = TodoState::new();
        assert_eq!(s.delete_list(1), s);
    }

    #[test]
    fn delete_list_cascades_and_keeps_active_list() {
        // deleting an inactive list leaves the active one alone
        let s = state(
            vec![list(1, "a", false), list(2, "b", true)],
            vec![item(10, 1, false), item(11, 2, true)],
        );
        let s = s.delete_list(1);
        assert_eq!(s.lists.len(), 1);
        assert_eq!(s.lists[0].id, 2);
        assert!(s.lists[0].active);
        assert_eq!(s.items, vec![item(11, 2, true)]);
        assert_invariants(&s);
    }

    #[test]
    fn delete_active_list_activates_the_preceding_one() {
        let s = state(
            vec![list(1, "a", false), list(2, "b", false), list(3, "c", true)],
            vec![],
        );
        let s = s.delete_list(3);
        assert_eq!(s.lists.len(), 2);
        assert!(s.lists[1].active, "preceding list in display order");
        assert_eq!(s.lists[1].id, 2);
        assert_invariants(&s);
    }

    #[test]
    fn delete_active_list_at_front_activates_the_first() {
        let s = state(
            vec![list(1, "a", true), list(2, "b", false), list(3, "c", false)],
            vec![],
        );
        let s = s.delete_list(1);
        assert!(s.lists[0].active);
        assert_eq!(s.lists[0].id, 2);
        assert_invariants(&s);
    }

    #[test]
    fn delete_unknown_list_is_a_noop() {
        let s = TodoState::new().add_list();
        assert_eq!(s.delete_list(42), s);
    }

    #[test]
    fn add_item_attaches_to_the_active_list() {
        let s = TodoState::new().add_item("buy milk");
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.items[0].list_id, 1);
        assert_eq!(s.items[0].text, "buy milk");
        assert!(!s.items[0].done);
        let s = s.add_item("");
        assert_eq!(s.items.len(), 1);
        assert_invariants(&s);
    }

    #[test]
    fn add_item_rejects_whitespace_only_text() {
        let s = TodoState::new().add_item("   \t ");
        assert!(s.items.is_empty());
    }

    #[test]
    fn item_ids_are_strictly_increasing() {
        let mut s = TodoState::new();
        for n in 0..20 {
            s = s.add_item(&format!("entry {}", n));
        }
        for pair in s.items.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
        assert_invariants(&s);
    }

    #[test]
    fn toggle_done_flips_both_ways() {
        let s = TodoState::new().add_item("task");
        let id = s.items[0].id;
        let s = s.toggle_done(id);
        assert!(s.items[0].done);
        let s = s.toggle_done(id);
        assert!(!s.items[0].done);
    }

    #[test]
    fn toggle_done_unknown_id_is_a_noop() {
        let s = TodoState::new().add_item("task");
        assert_eq!(s.toggle_done(0), s);
    }

    #[test]
    fn delete_item_removes_only_the_match() {
        let s = TodoState::new().add_item("one").add_item("two");
        let first = s.items[0].id;
        let s = s.delete_item(first);
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.items[0].text, "two");
        let unchanged = s.delete_item(0);
        assert_eq!(unchanged, s);
    }

    #[test]
    fn delete_done_items_is_scoped_to_the_active_list() {
        let s = state(
            vec![list(1, "a", false), list(2, "b", true)],
            vec![item(20, 2, true), item(21, 1, true)],
        );
        let s = s.delete_done_items();
        assert_eq!(s.items, vec![item(21, 1, true)]);
        assert_invariants(&s);
    }

    #[test]
    fn delete_done_items_without_done_items_is_a_noop() {
        let s = TodoState::new().add_item("pending");
        assert!(!s.has_done_items());
        assert_eq!(s.delete_done_items(), s);
    }

    #[test]
    fn has_done_items_ignores_other_lists() {
        let s = state(
            vec![list(1, "a", true), list(2, "b", false)],
            vec![item(30, 2, true)],
        );
        assert!(!s.has_done_items());
        let s = s.set_active_list(2);
        assert!(s.has_done_items());
    }

    #[test]
    fn visible_items_follow_the_active_list() {
        let s = state(
            vec![list(1, "a", true), list(2, "b", false)],
            vec![item(40, 1, false), item(41, 2, false), item(42, 1, true)],
        );
        let visible: Vec<u64> = s.visible_items().iter().map(|i| i.id).collect();
        assert_eq!(visible, vec![40, 42]);
        let visible: Vec<u64> = s
            .set_active_list(2)
            .visible_items()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(visible, vec![41]);
    }

    #[test]
    fn invariants_hold_across_a_mixed_session() {
        let mut s = TodoState::new();
        s = s.add_item("first").add_list().add_item("second");
        s = s.rename_list(2, "errands");
        s = s.toggle_done(s.items[1].id);
        s = s.delete_done_items();
        s = s.set_active_list(1);
        s = s.add_list().delete_list(3);
        assert_invariants(&s);
        assert_eq!(s.active_list().id, 2, "preceding list after deleting the tail");
        assert_eq!(s.items.len(), 1);
    }
}
