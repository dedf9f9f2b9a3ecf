//! List Serialization
//!
//! JSON encoding of the whole list for the durable store. The stored
//! value under [`STORAGE_KEY`] is always the full array of
//! `{"_id": n, "_item": "text"}` records, replaced on every mutation.

use thiserror::Error;

use crate::item::TodoItem;

/// Key the serialized list lives under in the durable store.
pub const STORAGE_KEY: &str = "myToDoList";

/// A stored payload that does not decode back into a list of items.
/// Fatal at startup: the app refuses to guess at partial state.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("stored to-do list is not a valid item array: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize the full item sequence to the stored JSON form.
pub fn encode_items(items: &[TodoItem]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

/// Decode a stored blob back into an item sequence, preserving order.
pub fn decode_items(blob: &str) -> Result<Vec<TodoItem>, DecodeError> {
    Ok(serde_json::from_str(blob)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_reproduces_sequence() {
        let items = vec![TodoItem::new(1, "Buy milk"), TodoItem::new(2, "Walk dog")];
        let blob = encode_items(&items).unwrap();
        assert_eq!(decode_items(&blob).unwrap(), items);
    }

    #[test]
    fn test_decode_accepts_blob_from_earlier_versions() {
        // Literal localStorage value written by an earlier version.
        let blob = r#"[{"_id":1,"_item":"Buy milk"},{"_id":2,"_item":"Walk dog"}]"#;
        let items = decode_items(blob).unwrap();
        let pairs: Vec<_> = items.iter().map(|i| (i.id(), i.text())).collect();
        assert_eq!(pairs, vec![(1, "Buy milk"), (2, "Walk dog")]);
    }

    #[test]
    fn test_encode_empty_list_is_empty_array() {
        assert_eq!(encode_items(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_decode_rejects_corrupt_payload() {
        assert!(decode_items("not json at all").is_err());
        assert!(decode_items(r#"{"_id":1}"#).is_err());
    }
}
