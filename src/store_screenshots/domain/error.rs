use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
