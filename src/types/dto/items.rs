use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::FieldErrors;

/// Request body for creating or updating an item
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation error instead of a malformed body.
#[derive(Object, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Short title of the item
    pub title: Option<String>,

    /// Free-text comment
    pub comment: Option<String>,
}

impl ItemRequest {
    pub fn new(title: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            comment: Some(comment.into()),
        }
    }
}

/// Item as returned by the API, including derived date fields
#[derive(Object, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier
    pub id: i32,

    /// Short title of the item
    pub title: String,

    /// Free-text comment
    pub comment: String,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,

    /// Last modification timestamp (RFC 3339)
    pub updated_at: String,

    /// Creation time relative to now, e.g. "3 minutes ago"
    pub written_at: String,

    /// Modification time relative to now
    pub modified_at: String,

    /// Creation time as `YYYY-MM-DD HH:MM:SS`
    pub created_date: String,

    /// Modification time as `YYYY-MM-DD HH:MM:SS`
    pub updated_date: String,
}

/// Envelope for single-item responses
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item: Item,
}

/// Envelope for the item listing
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ItemListResponse {
    /// Items ordered newest first
    pub items: Vec<Item>,
}

/// Body of a 422 response
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    /// Summary message
    pub message: String,

    /// Messages keyed by field name
    pub errors: FieldErrors,
}
