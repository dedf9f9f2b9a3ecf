//! To-Do Item Entity
//!
//! One entry in the list: an id plus its user-visible text.

use serde::{Deserialize, Serialize};

/// Identifier for a [`TodoItem`], unique within a list.
pub type ItemId = u32;

/// A single to-do entry.
///
/// Immutable after construction: the only externally observable state
/// changes are removal from, and re-addition to, the owning list. The
/// serde field names (`_id`, `_item`) match the persisted blob format,
/// so lists written by earlier versions of the app decode unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(rename = "_id")]
    id: ItemId,
    #[serde(rename = "_item")]
    text: String,
}

impl TodoItem {
    /// Create an item. The caller validates the text and assigns the id
    /// before construction; no checks happen here.
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let item = TodoItem::new(1, "Buy milk");
        assert_eq!(item.id(), 1);
        assert_eq!(item.text(), "Buy milk");
    }

    #[test]
    fn test_item_serializes_with_legacy_field_names() {
        let item = TodoItem::new(2, "Walk dog");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"_id":2,"_item":"Walk dog"}"#);
    }

    #[test]
    fn test_item_deserializes_from_legacy_field_names() {
        let item: TodoItem = serde_json::from_str(r#"{"_id":7,"_item":"Water plants"}"#).unwrap();
        assert_eq!(item, TodoItem::new(7, "Water plants"));
    }
}
