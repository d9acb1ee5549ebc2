//! Speech Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown voice '{0}'")]
    UnknownVoice(String),

    #[error("Unknown model '{0}'")]
    UnknownModel(String),

    #[error("Invalid format '{0}'")]
    UnknownFormat(String),

    #[error("{0} is not enabled")]
    NotAllowed(String),
}
