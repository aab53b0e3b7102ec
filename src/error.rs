//! Request-level error taxonomy and its HTTP mapping

use thiserror::Error;
use warp::http::StatusCode;

use crate::commands::CommandError;
use crate::image_store::StoreError;
use crate::intent::IntentError;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ChatError {
    /// Malformed body, missing command arguments, empty fields
    #[error("{0}")]
    BadRequest(String),

    /// Retrieve on an unknown name
    #[error("{0}")]
    NotFound(String),

    /// Save on a name that already exists
    #[error("{0}")]
    Conflict(String),

    /// Classifier unreachable, non-success or malformed
    #[error(transparent)]
    Upstream(#[from] IntentError),

    /// Persistence failure
    #[error("{0}")]
    Store(String),
}

impl ChatError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChatError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ChatError::NotFound(_) => StatusCode::NOT_FOUND,
            ChatError::Conflict(_) => StatusCode::CONFLICT,
            ChatError::Upstream(_) | ChatError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ChatError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ChatError::NotFound(err.to_string()),
            StoreError::DuplicateKey(_) => ChatError::Conflict(err.to_string()),
            StoreError::WriteFailure(_) | StoreError::ReadFailure(_) | StoreError::Connection(_) => {
                ChatError::Store(err.to_string())
            }
        }
    }
}

impl From<CommandError> for ChatError {
    fn from(err: CommandError) -> Self {
        ChatError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_status() {
        let not_found: ChatError = StoreError::NotFound("cat".to_string()).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Image 'cat' not found");

        let duplicate: ChatError = StoreError::DuplicateKey("cat".to_string()).into();
        assert_eq!(duplicate.status_code(), StatusCode::CONFLICT);

        let write: ChatError = StoreError::WriteFailure("disk full".to_string()).into();
        assert_eq!(write.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_errors_are_server_errors() {
        let status: ChatError = IntentError::Status {
            status: 404,
            body: String::new(),
        }
        .into();
        assert_eq!(status.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let unavailable: ChatError = IntentError::Unavailable("refused".to_string()).into();
        assert_eq!(unavailable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let decode: ChatError = IntentError::Decode("eof".to_string()).into();
        assert_eq!(decode.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_command_error_is_bad_request() {
        let err: ChatError = CommandError::MissingArgument {
            command: "save",
            expected: 3,
            found: 1,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("save"));
    }
}
