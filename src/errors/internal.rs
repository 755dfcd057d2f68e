use thiserror::Error;

use crate::types::internal::FieldErrors;

/// Internal error type for store and service operations
///
/// Separates infrastructure errors (Database, Transaction) shared by every
/// store from the item domain errors.
///
/// This error type is NOT exposed via API. Endpoints must explicitly
/// convert it with `ItemsApiError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    // ============================================================
    // Infrastructure Errors
    // ============================================================

    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Database transaction failed
    #[error("Transaction error: {operation} failed: {source}")]
    Transaction {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    // ============================================================
    // Domain Errors
    // ============================================================

    /// Item store errors (lookup and validation)
    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    /// Create a transaction error with context
    pub fn transaction(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Transaction {
            operation: operation.into(),
            source,
        }
    }
}

/// Item store specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// No item with the given id
    #[error("Item not found: {0}")]
    NotFound(i32),

    /// One or more required fields are missing or empty
    #[error("Validation failed for: {}", fields_list(.0))]
    Validation(FieldErrors),
}

fn fields_list(errors: &FieldErrors) -> String {
    errors.keys().cloned().collect::<Vec<_>>().join(", ")
}
