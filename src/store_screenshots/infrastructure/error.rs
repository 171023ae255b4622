use thiserror::Error;
use crate::domain::error::DomainError;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Image processing failed: {0}")]
    ImageProcessingError(String),

    #[error("File storage error: {0}")]
    FileStorageError(String),

    #[error("Invalid catalog: {0}")]
    CatalogError(String),

    #[error("Underlying image library error")]
    ImageLibError(#[from] image::ImageError),

    #[error("Underlying I/O error")]
    IoError(#[from] std::io::Error),

    #[error("PNG encoding failed")]
    PngEncodingError(#[from] png::EncodingError),

    #[error("Catalog JSON is malformed")]
    JsonError(#[from] serde_json::Error),

    #[error("Domain Error Wrapper: {0}")]
    DomainErrorWrapper(#[from] DomainError),
}
