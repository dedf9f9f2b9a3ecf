//! List Controller
//!
//! Wires user actions to list mutations, the durable store, and the
//! rendered view. Every mutating flow follows the same protocol: apply
//! the mutation, replace the stored blob with the full sequence, show a
//! confirmation message, then redraw the whole view and reset the entry
//! field. Single-threaded and synchronous throughout; the host's event
//! dispatch serializes flows, so none can interleave mid-step.

use crate::item::{ItemId, TodoItem};
use crate::list::TodoList;
use crate::persist::{self, DecodeError};

/// Milliseconds between a removal and its deferred view refresh, so the
/// user sees the completed toggle state before the row disappears.
pub const REMOVAL_REFRESH_DELAY_MS: u32 = 1_000;

/// Prompt shown before clearing the whole list.
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear the entire list?";

/// Durable store collaborator: get/set of a single string blob.
pub trait DurableStore {
    /// Current stored blob, or `None` when nothing has been saved yet.
    fn load(&self) -> Option<String>;

    /// Replace the stored blob wholesale.
    fn save(&mut self, blob: &str);
}

/// View collaborator: renders the item sequence and owns the entry
/// field plus the confirmation status line.
pub trait ListView {
    /// Clear the displayed list and rebuild it from `items` (full
    /// redraw, not incremental patching).
    fn render(&mut self, items: &[TodoItem]);

    /// Show a short-lived, human-readable confirmation message.
    fn show_confirmation(&mut self, message: &str);

    /// Empty the entry field and return input focus to it.
    fn reset_entry(&mut self);
}

/// Confirm collaborator: synchronous yes/no prompt.
pub trait ConfirmPrompt {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Orchestrates the list, the durable store, and the view.
///
/// Owns the only [`TodoList`] instance; collaborators are handles whose
/// shared state (localStorage, reactive store) outlives the controller.
pub struct ListController<S, V, C> {
    list: TodoList,
    store: S,
    view: V,
    confirm: C,
}

impl<S, V, C> ListController<S, V, C>
where
    S: DurableStore,
    V: ListView,
    C: ConfirmPrompt,
{
    pub fn new(store: S, view: V, confirm: C) -> Self {
        Self {
            list: TodoList::new(),
            store,
            view,
            confirm,
        }
    }

    /// Startup: rebuild the list from the durable store and draw it.
    ///
    /// An absent blob starts an empty list. A blob that fails to decode
    /// is fatal to startup and propagates to the caller.
    pub fn init(&mut self) -> Result<(), DecodeError> {
        if let Some(blob) = self.store.load() {
            for item in persist::decode_items(&blob)? {
                self.list.add_item(item);
            }
        }
        self.refresh_view();
        Ok(())
    }

    /// Submission flow: trim the entry text and append a new item.
    ///
    /// Empty or whitespace-only text aborts silently, leaving list,
    /// store, and view untouched.
    pub fn submit_entry(&mut self, raw: &str) {
        let text = raw.trim();
        if text.is_empty() {
            // Silent no-op: nothing to add, no message shown.
            return;
        }
        let id = self.next_item_id();
        self.list.add_item(TodoItem::new(id, text));
        self.persist();
        self.view.show_confirmation(&format!("{text} added."));
        self.refresh_view();
    }

    /// Removal flow, minus the redraw: remove by id, persist, confirm.
    ///
    /// Returns whether an item was actually removed. On `true` the
    /// caller schedules [`refresh_view`](Self::refresh_view) after
    /// [`REMOVAL_REFRESH_DELAY_MS`], so the toggled row stays visible
    /// for a moment before it vanishes.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(removed) = self.list.remove_item(id) else {
            // Silent no-op: unknown id leaves everything unchanged.
            return false;
        };
        self.persist();
        self.view
            .show_confirmation(&format!("{} removed from list.", removed.text()));
        true
    }

    /// Clear-list flow: prompt, then drop every item.
    ///
    /// Does nothing when the list is already empty; the prompt is only
    /// shown otherwise, and a declined prompt changes nothing.
    pub fn clear_list(&mut self) {
        if self.list.is_empty() {
            return;
        }
        if !self.confirm.confirm(CLEAR_PROMPT) {
            return;
        }
        self.list.clear();
        self.persist();
        self.refresh_view();
    }

    /// Full redraw: rebuild the displayed rows from the current
    /// sequence, then reset and refocus the entry field.
    pub fn refresh_view(&mut self) {
        self.view.render(self.list.items());
        self.view.reset_entry();
    }

    /// Current item sequence, for read-only inspection.
    pub fn items(&self) -> &[TodoItem] {
        self.list.items()
    }

    /// Id for the next item: one past the last item's id, or 1 for an
    /// empty list. Only the last element is inspected, so ids freed by
    /// tail removals get reused. Saturates at `ItemId::MAX`, which a
    /// stored blob can carry even though normal use never reaches it.
    fn next_item_id(&self) -> ItemId {
        match self.list.items().last() {
            Some(last) => last.id().saturating_add(1),
            None => 1,
        }
    }

    fn persist(&mut self) {
        match persist::encode_items(self.list.items()) {
            Ok(blob) => self.store.save(&blob),
            Err(err) => log::error!("failed to serialize to-do list: {err}"),
        }
    }
}
