use mmds_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NewsError>;

#[derive(Debug, Clone, Error)]
pub enum NewsError {
    #[error("article storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
    #[error("article link already exists: {0}")]
    DuplicateLink(String),
    #[error("article not found: {0}")]
    NotFound(u64),
}
