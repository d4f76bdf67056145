//! Error handling for the dashboard client core
//!
//! Every error is terminal for the attempt that raised it only; no flow
//! retries automatically, and the prediction lifecycle always returns to
//! idle regardless of the outcome.

use thiserror::Error;

/// Generic user-facing message for unexpected failures
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
/// User-facing message when the prediction request could not complete
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch prediction";
/// User-facing message when an export is requested with no history
pub const EMPTY_EXPORT_MESSAGE: &str = "No prediction history to export!";

/// Client core error taxonomy
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid form input; no request is sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request could not complete (DNS, connect, timeout, decode)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success response; carries the server-supplied message verbatim
    #[error("Server error: {0}")]
    Server(String),

    /// Export requested with zero history records
    #[error("Nothing to export")]
    EmptyExport,

    /// CSV encoding failed
    #[error(transparent)]
    Export(#[from] shared::ExportError),

    /// Persisting client state failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl ClientError {
    /// The message a renderer should surface for this error.
    ///
    /// Server messages pass through verbatim; transport failures collapse to
    /// the generic fetch-failed text.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Network(_) => FETCH_FAILED_MESSAGE.to_string(),
            ClientError::Server(msg) => msg.clone(),
            ClientError::EmptyExport => EMPTY_EXPORT_MESSAGE.to_string(),
            ClientError::Export(_) | ClientError::Storage(_) | ClientError::Configuration(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Result type alias for the client core
pub type ClientResult<T> = Result<T, ClientError>;
