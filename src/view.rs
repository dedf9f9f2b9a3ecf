//! Reactive View Collaborator
//!
//! Implements the controller's view trait on top of the global store:
//! a "full redraw" is replacing the items vector, which Leptos then
//! reconciles into the DOM.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use todo_core::{ListView, TodoItem};

use crate::store::{AppStateStoreFields, AppStore};

/// DOM id of the entry input, used to return focus after a redraw.
pub const ENTRY_FIELD_ID: &str = "newItem";

/// View collaborator writing into the reactive [`AppStore`].
pub struct StoreView {
    store: AppStore,
}

impl StoreView {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl ListView for StoreView {
    fn render(&mut self, items: &[TodoItem]) {
        self.store.items().set(items.to_vec());
    }

    fn show_confirmation(&mut self, message: &str) {
        self.store.confirmation().set(message.to_string());
    }

    fn reset_entry(&mut self) {
        self.store.entry_draft().set(String::new());
        focus_entry_field();
    }
}

/// Put the cursor back into the entry input, if it is mounted yet.
fn focus_entry_field() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(input) = document
        .get_element_by_id(ENTRY_FIELD_ID)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let _ = input.focus();
}
