use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("WebP encoding error: {0}")]
    WebPEncoding(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid encoder method: {0}. Must be between 0 and 6")]
    InvalidMethod(u8),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("Folder not found: {0}")]
    FolderNotFound(PathBuf),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

impl From<tempfile::PersistError> for ConversionError {
    fn from(err: tempfile::PersistError) -> Self {
        ConversionError::Io(err.error)
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
