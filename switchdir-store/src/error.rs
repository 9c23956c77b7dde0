//! Store errors

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),
    
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    
    #[error("Store returned {status}: {message}")]
    Status {
        status: u16,
        message: String,
    },
    
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("Invalid record: {0}")]
    Record(#[from] switchdir_types::Error),
    
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}

impl Error {
    /// Check if error is recoverable (retry might succeed)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}
