//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Navigation error: {0}")]
    Core(#[from] switchdir_core::Error),
    
    #[error("Store error: {0}")]
    Store(#[from] switchdir_store::Error),
}
