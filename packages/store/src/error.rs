use thiserror::Error;

/// Errors raised by session persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored session is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("stored session is missing required fields")]
    Incomplete,

    #[error("failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
