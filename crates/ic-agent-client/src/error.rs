//! Client-layer error types.

use thiserror::Error;

/// Errors that can occur in the client layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Credential discovery or parsing failed. The message carries the
    /// setup instructions the operator needs.
    #[error("credentials error: {0}")]
    Credentials(String),

    #[error("config error: {0}")]
    Config(String),

    /// Transport-level HTTP failure.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API rejected the request.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Training-phrase annotation failed; the whole intent operation aborts.
    #[error(transparent)]
    Annotate(#[from] ic_annotate::AnnotateError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    Duplicate(String),
}

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;
