use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Azure Key Vault error: {0}")]
    KeyVault(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Index file error: {0}")]
    Index(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
