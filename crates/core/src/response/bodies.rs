//! Response payloads.
//!
//! Field names are PascalCase on the wire (`Operation`, `Message`, `Item`,
//! `UpdatedAttributes`), except the collection wrapper which uses `users`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::Record;

pub const SAVE_MESSAGE: &str = "USER SAVE SUCCESS!";
pub const UPDATE_MESSAGE: &str = "SUCCESS";
pub const DELETE_MESSAGE: &str = "USER DELETE SUCCESS!";

/// Which write an [`OperationResult`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Save,
    Update,
    Delete,
}

/// Body of a successful write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationResult {
    pub operation: OperationKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_attributes: Option<Map<String, Value>>,
}

impl OperationResult {
    pub fn saved(record: Record) -> Self {
        Self {
            operation: OperationKind::Save,
            message: SAVE_MESSAGE.to_string(),
            item: Some(record),
            updated_attributes: None,
        }
    }

    pub fn updated(attributes: Map<String, Value>) -> Self {
        Self {
            operation: OperationKind::Update,
            message: UPDATE_MESSAGE.to_string(),
            item: None,
            updated_attributes: Some(attributes),
        }
    }

    pub fn deleted(record: Record) -> Self {
        Self {
            operation: OperationKind::Delete,
            message: DELETE_MESSAGE.to_string(),
            item: Some(record),
            updated_attributes: None,
        }
    }
}

/// Body of a full listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordList {
    pub users: Vec<Record>,
}

/// Body of every failure except an unmatched route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: kind.into(),
            message: message.into(),
        }
    }
}
