//! To-Do List Collection
//!
//! Ordered in-memory sequence of items, insertion order preserved.
//! Persistence and rendering live in the controller; this type only
//! mutates its own state.

use crate::item::{ItemId, TodoItem};

/// The session's ordered collection of to-do items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end. Callers supply correct ids; no
    /// duplicate check is performed here.
    pub fn add_item(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    /// Remove the first item with the given id and return it.
    /// Unknown ids leave the list unchanged and return `None`.
    pub fn remove_item(&mut self, id: ItemId) -> Option<TodoItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only view of the current sequence.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
