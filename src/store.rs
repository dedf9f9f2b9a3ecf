//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! controller writes this store through its view collaborator; the
//! components only read it.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoItem;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently displayed item sequence (full redraw on every change)
    pub items: Vec<TodoItem>,
    /// Short-lived confirmation message for the last add/remove
    pub confirmation: String,
    /// Current text of the entry field
    pub entry_draft: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
