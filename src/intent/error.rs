//! Error types for the intent classifier client

use thiserror::Error;

/// Errors that can occur when calling the intent classifier
#[derive(Debug, Error)]
pub enum IntentError {
    /// Connection could not be established or the request timed out
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    /// The classifier answered with a non-success status
    #[error("Classifier returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Failed to decode classifier response: {0}")]
    Decode(String),
}

impl IntentError {
    /// Whether another attempt could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, IntentError::Unavailable(_))
    }
}

impl From<serde_json::Error> for IntentError {
    fn from(err: serde_json::Error) -> Self {
        IntentError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for IntentError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            IntentError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else if err.is_decode() {
            IntentError::Decode(err.to_string())
        } else {
            IntentError::Unavailable(err.to_string())
        }
    }
}
