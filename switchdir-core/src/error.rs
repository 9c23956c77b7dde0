//! Error types for switchdir-core

/// Result type alias for switchdir-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core lookup errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Path does not name a known view
    #[error("Unknown path: {0}")]
    InvalidPath(String),
    
    /// Percent-encoded path segment is not valid UTF-8
    #[error("Invalid path encoding in {segment:?}: {source}")]
    InvalidEncoding {
        segment: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
