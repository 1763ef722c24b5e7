//! Error types for the SharePoint client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while mapping SharePoint responses into the
/// object model.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Response body was not valid JSON, or a field had an unexpected type.
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// Response parsed as JSON but did not have the expected envelope shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A required field was absent from the payload.
    #[error("Missing field `{field}` in {entity} payload")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}

impl ClientError {
    /// Check if this error indicates a payload the service produced that the
    /// model layer could not interpret, as opposed to valid JSON in an
    /// unexpected envelope.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
