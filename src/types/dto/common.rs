use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,

    /// Number of items currently stored
    pub item_count: u64,
}

/// Standardized error response model
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type or category
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}
