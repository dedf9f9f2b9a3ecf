//! Browser Collaborators
//!
//! Bindings from the controller's durable-store and confirm traits to
//! `window.localStorage` and `window.confirm`.

use todo_core::{ConfirmPrompt, DurableStore, STORAGE_KEY};

/// Durable store over the page origin's localStorage.
///
/// A missing window or disabled storage degrades to "nothing stored":
/// loads return `None` and saves are dropped with a console warning.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl DurableStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&mut self, blob: &str) {
        let Some(storage) = Self::storage() else {
            web_sys::console::warn_1(&"localStorage unavailable, list not persisted".into());
            return;
        };
        if storage.set_item(STORAGE_KEY, blob).is_err() {
            web_sys::console::warn_1(&"localStorage write failed, list not persisted".into());
        }
    }
}

/// Yes/no prompt via the browser's blocking confirm dialog.
#[derive(Clone, Copy, Default)]
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
