use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while reading or writing the persisted collection
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure other than a missing document
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The persisted document exists but is not a valid message list
    #[error("malformed message document {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
