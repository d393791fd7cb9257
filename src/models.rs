//! Data Models
//!
//! Plain data structures held by the state core.

use serde::{Deserialize, Serialize};

/// A named grouping of items; exactly one list is active at a time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: u32,
    pub name: String,
    pub active: bool,
}

/// A single to-do entry scoped to one list
///
/// `list_id` is a lookup key, not an ownership pointer: deleting the
/// owning list cascade-deletes the items referencing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub list_id: u32,
    pub text: String,
    pub done: bool,
}
