//! Editor error types

use thiserror::Error;

use crate::infrastructure::api_client::ApiError;

/// Errors surfaced by editor and publication operations
///
/// Every public operation catches its own failures and mirrors them into
/// notifications or readable error fields; the `Result` is for callers that
/// branch on the outcome (e.g. navigate only on success).
#[derive(Debug, Error)]
pub enum EditorError {
    /// Operation needs a loaded chapter and none is present yet
    #[error("no chapter is loaded")]
    ChapterNotLoaded,

    /// Operation needs an active language and none is set yet
    #[error("no language is active")]
    NoActiveLanguage,

    /// Input rejected before any side effect
    #[error("{0}")]
    Validation(String),

    /// The server or the connection failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl EditorError {
    /// Message suitable for a user-facing notification, with the generic
    /// fallback for failures that carry nothing readable.
    pub fn user_message(&self) -> String {
        use crate::infrastructure::constants::messages;

        match self {
            EditorError::Validation(message) => message.clone(),
            EditorError::Api(ApiError::Status { message, .. }) if !message.trim().is_empty() => {
                message.clone()
            }
            EditorError::Api(_) => messages::UNEXPECTED_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}
