//! To-Do Domain Layer
//!
//! Pure list/item model plus the controller that synchronizes it with a
//! durable store and a rendered view. No browser dependencies: the
//! frontend binds the collaborator traits to localStorage and the DOM,
//! tests bind them to in-memory fakes.

mod controller;
mod item;
mod list;
mod persist;

pub use controller::{
    ConfirmPrompt, DurableStore, ListController, ListView, CLEAR_PROMPT,
    REMOVAL_REFRESH_DELAY_MS,
};
pub use item::{ItemId, TodoItem};
pub use list::TodoList;
pub use persist::{decode_items, encode_items, DecodeError, STORAGE_KEY};
