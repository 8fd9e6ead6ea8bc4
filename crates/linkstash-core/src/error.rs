use thiserror::Error;

/// Result type for operations on core types.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
    #[error("slug already exists: {0}")]
    DuplicateSlug(String),
}

/// Errors raised by a snapshot backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("snapshot serialization failed: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("404 - URL Not Found: {0}")]
    NotFound(String),
    #[error("no unused slug found after {attempts} attempts")]
    SlugExhausted { attempts: u32 },
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
