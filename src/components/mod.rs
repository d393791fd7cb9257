//! UI Components
//!
//! Reusable Leptos components.

mod clear_done_button;
mod delete_confirm_button;
mod item_list;
mod item_row;
mod list_tab_bar;
mod new_item_form;

pub use clear_done_button::ClearDoneButton;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use list_tab_bar::ListTabBar;
pub use new_item_form::NewItemForm;
