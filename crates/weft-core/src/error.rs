//! Error types for weft-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    /// Function call arguments are present but not a JSON object
    #[error("Invalid function call arguments {arguments:?}: {source}")]
    InvalidArguments {
        arguments: String,
        #[source]
        source: serde_json::Error,
    },

    /// Function call has no name to decompose
    #[error("Invalid function call name: {0}")]
    InvalidName(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ContentError {
    pub fn is_invalid_arguments(&self) -> bool {
        matches!(self, ContentError::InvalidArguments { .. })
    }

    pub fn is_invalid_name(&self) -> bool {
        matches!(self, ContentError::InvalidName(_))
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
