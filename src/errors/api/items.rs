use crate::errors::internal::{InternalError, ItemError};
use crate::types::dto::common::ErrorResponse;
use crate::types::dto::items::ValidationErrorResponse;
use crate::types::internal::FieldErrors;
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Summary message carried by every 422 response
pub const VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemsApiError {
    /// Item not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Request failed validation
    #[oai(status = 422)]
    ValidationFailed(Json<ValidationErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemsApiError {
    /// Create a NotFound error
    ///
    /// Takes the id as it appeared in the request path, which may not be numeric.
    pub fn not_found(id: impl fmt::Display) -> Self {
        ItemsApiError::NotFound(Json(ErrorResponse {
            error: "item_not_found".to_string(),
            message: format!("Item not found: {}", id),
            status_code: 404,
        }))
    }

    /// Create a ValidationFailed error from per-field messages
    pub fn validation_failed(errors: FieldErrors) -> Self {
        ItemsApiError::ValidationFailed(Json(ValidationErrorResponse {
            message: VALIDATION_MESSAGE.to_string(),
            errors,
        }))
    }

    /// Convert InternalError to ItemsApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err {
            InternalError::Database { ref operation, .. } => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Transaction { ref operation, .. } => {
                tracing::error!("Transaction error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Item(ItemError::NotFound(id)) => Self::not_found(id),
            InternalError::Item(ItemError::Validation(errors)) => Self::validation_failed(errors),
        }
    }

    /// Generic internal server error without internal details
    fn internal_server_error() -> Self {
        ItemsApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemsApiError::NotFound(json) => json.0.message.clone(),
            ItemsApiError::ValidationFailed(json) => json.0.message.clone(),
            ItemsApiError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemsApiError::NotFound(json) => json.0.status_code,
            ItemsApiError::ValidationFailed(_) => 422,
            ItemsApiError::InternalError(json) => json.0.status_code,
        }
    }
}

impl From<InternalError> for ItemsApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemsApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
