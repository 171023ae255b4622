use thiserror::Error;
use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Screenshot generation failed for {output}: {source}")]
    ScreenshotGenerationFailed {
        output: String,
        #[source]
        source: InfrastructureError,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Domain error occurred: {0}")]
    DomainError(#[from] DomainError),

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[from] InfrastructureError),
}
