//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every failure is fatal: the export either completes for the whole
/// fetched population or the run stops before producing output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Join error: {0}")]
    Join(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an authentication/signing error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a data-shape error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a join error
    pub fn join(msg: impl Into<String>) -> Self {
        Self::Join(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
