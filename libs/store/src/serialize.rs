//! Document serialization for the HTTP layer.

use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Convert a stored document to its external JSON shape.
///
/// The native `_id` is removed and re-inserted as a string `id` field
/// (ObjectIds as their 24-char hex); every other field passes through
/// unchanged via relaxed extended JSON, so fields written by external tools
/// survive the round trip.
pub fn doc_to_json(mut document: Document) -> Value {
    let id = document.remove("_id");

    let mut value = Bson::Document(document).into_relaxed_extjson();

    if let (Some(id), Some(map)) = (id, value.as_object_mut()) {
        let id_value = match id {
            Bson::ObjectId(oid) => Value::String(oid.to_hex()),
            other => other.into_relaxed_extjson(),
        };
        map.insert("id".to_string(), id_value);
    }

    value
}
