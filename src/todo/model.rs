//! Todo entity and request payload types.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize, Serializer};

/// A single todo record as persisted in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Storage-assigned identifier, absent until inserted. Stored as the
    /// BSON `_id` and exposed in JSON as the plain 24-char hex string.
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_id_as_hex"
    )]
    pub id: Option<ObjectId>,

    /// Completion flag, false for new records.
    #[serde(default)]
    pub completed: bool,

    /// Free-text body, required non-empty at creation.
    pub body: String,
}

/// Inbound payload for creating a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    /// Completion flag, defaults to false when omitted.
    #[serde(default)]
    pub completed: bool,

    /// Free-text body.
    pub body: String,
}

impl From<NewTodo> for Todo {
    fn from(payload: NewTodo) -> Self {
        Self {
            id: None,
            completed: payload.completed,
            body: payload.body,
        }
    }
}

/// Serialize the identifier as its hex string rather than the driver's
/// `{"$oid": ...}` extended-JSON form.
fn serialize_id_as_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
