//! Domain error types.
//!
//! [`LinkError`] is the closed set of outcomes the link service reports.
//! [`CodecError`] and [`StorageError`] stay internal to the codec and the
//! store adapters and are folded into it by the service.

/// Errors produced by the slug codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("identifier must be non-negative, got {0}")]
    InvalidArgument(i64),

    #[error("slug {0:?} contains illegal character(s)")]
    DecodeFailure(String),

    #[error("slug {0:?} exceeds the identifier range")]
    Overflow(String),
}

/// Errors raised by a durable store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Outcomes of link service operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The codec was handed a negative identifier.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The slug contains a character outside the alphabet.
    #[error("cannot decode slug")]
    DecodeFailure,

    /// The slug is well-formed but no link backs it.
    #[error("link not found")]
    NotFound,

    /// A new link could not be persisted.
    #[error("failed to store link: {0}")]
    StorageFailure(#[source] StorageError),
}

impl From<CodecError> for LinkError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::InvalidArgument(_) => LinkError::InvalidArgument(err.to_string()),
            CodecError::DecodeFailure(_) => LinkError::DecodeFailure,
            // No stored identifier can exceed the column type.
            CodecError::Overflow(_) => LinkError::NotFound,
        }
    }
}
