//! Failure taxonomy shared by the service operations and the HTTP boundary.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed identifier or a field that failed validation. Nothing was written.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("player {0} not found")]
    NotFound(i64),

    /// Raised by the storage collaborator; never shown to clients verbatim.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
