//! Tourist spot documents
//!
//! A spot is an arbitrary JSON object. The store assigns the identifier,
//! which is exposed to clients as the `_id` field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::ValidationError;

/// Wire name of the store-assigned identifier
pub const ID_FIELD: &str = "_id";

/// Schema-less document body
pub type Document = Map<String, Value>;

/// Store-assigned spot identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(Uuid);

impl SpotId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SpotId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SpotId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for SpotId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "invalid UUID format",
            })
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted spot: its identifier plus the stored fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TouristSpot {
    #[serde(rename = "_id")]
    pub id: SpotId,

    #[serde(flatten)]
    pub fields: Document,
}

impl TouristSpot {
    pub fn new(id: SpotId, mut fields: Document) -> Self {
        strip_id(&mut fields);
        Self { id, fields }
    }

    /// Owner email, when the document carries a string `email` field.
    pub fn email(&self) -> Option<&str> {
        self.fields.get("email").and_then(Value::as_str)
    }
}

/// Drop a client-supplied `_id`; identifiers only come from the store.
pub fn strip_id(doc: &mut Document) {
    doc.remove(ID_FIELD);
}

/// Overwrite top-level keys of `target` with those in `patch`.
///
/// Returns whether `target` changed.
pub fn merge_fields(target: &mut Document, patch: Document) -> bool {
    let mut changed = false;
    for (key, value) in patch {
        if key == ID_FIELD {
            continue;
        }
        if target.get(&key) != Some(&value) {
            target.insert(key, value);
            changed = true;
        }
    }
    changed
}
