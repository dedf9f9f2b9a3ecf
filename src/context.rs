//! Application Context
//!
//! Owns the controller and the pending deferred-refresh timer, provided
//! to all components via the Leptos Context API. Handlers go through
//! these methods instead of touching the controller directly.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use todo_core::{ItemId, ListController, REMOVAL_REFRESH_DELAY_MS};

use crate::browser::{BrowserConfirm, LocalStorageStore};
use crate::store::AppStore;
use crate::view::StoreView;

/// The controller with its browser collaborators bound in.
pub type AppController = ListController<LocalStorageStore, StoreView, BrowserConfirm>;

/// App-wide handle to the controller, cloned into event handlers
#[derive(Clone)]
pub struct AppContext {
    controller: Rc<RefCell<AppController>>,
    /// Handle for the scheduled post-removal refresh. Replacing it
    /// drops (and thereby cancels) a still-pending older refresh.
    pending_refresh: Rc<RefCell<Option<Timeout>>>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        let controller = ListController::new(LocalStorageStore, StoreView::new(store), BrowserConfirm);
        Self {
            controller: Rc::new(RefCell::new(controller)),
            pending_refresh: Rc::new(RefCell::new(None)),
        }
    }

    /// Load the persisted list and draw it. A corrupt stored payload is
    /// fatal to startup, surfaced through the console panic hook.
    pub fn init(&self) {
        self.controller
            .borrow_mut()
            .init()
            .expect("stored to-do list should decode");
    }

    /// Submission flow for the entry form.
    pub fn submit_entry(&self, raw: &str) {
        self.controller.borrow_mut().submit_entry(raw);
    }

    /// Removal flow: mutate and persist now, redraw after the fixed
    /// delay so the checked-off row stays visible for a moment.
    pub fn remove_item(&self, id: ItemId) {
        if !self.controller.borrow_mut().remove_item(id) {
            return;
        }
        let controller = Rc::clone(&self.controller);
        let refresh = Timeout::new(REMOVAL_REFRESH_DELAY_MS, move || {
            controller.borrow_mut().refresh_view();
        });
        *self.pending_refresh.borrow_mut() = Some(refresh);
    }

    /// Clear-list flow (prompt included).
    pub fn clear_list(&self) {
        self.controller.borrow_mut().clear_list();
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<StoredValue<AppContext, LocalStorage>>().get_value()
}
