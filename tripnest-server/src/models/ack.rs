//! Mutation acknowledgments
//!
//! Field names follow the document-driver result shapes that existing API
//! clients parse (`insertedId`, `modifiedCount`, ...).

use serde::Serialize;

use super::SpotId;

/// Result of a create
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: SpotId,
}

impl InsertAck {
    pub fn new(inserted_id: SpotId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Result of a partial-merge update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    /// Always null: updates never upsert
    pub upserted_id: Option<SpotId>,
    pub upserted_count: u64,
}

impl UpdateAck {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_id: None,
            upserted_count: 0,
        }
    }
}

/// Result of a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
