use thiserror::Error;

use crate::types::internal::FieldErrors;

/// Failures surfaced to the terminal client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The API rejected the input (422)
    #[error("The given data was invalid.")]
    Validation(FieldErrors),

    /// The API reported an unknown item (404)
    #[error("{0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Server responded with status {0}")]
    Server(u16),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// A success response whose body could not be decoded
    #[error("Unexpected response body: {0}")]
    Decode(String),
}
