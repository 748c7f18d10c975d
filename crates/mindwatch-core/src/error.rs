//! Error types for mindwatch-core.

use thiserror::Error;

use crate::types::Modality;

/// Top-level error type for mindwatch-core.
///
/// Raised by encoders, the fusion engine and configuration loading. The
/// inference service wraps every variant into its own internal-error kind.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Empty {modality} embedding: at least one value is required")]
    EmptyEmbedding { modality: Modality },

    #[error("Invalid {modality} vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        modality: Modality,
        expected: usize,
        actual: usize,
    },

    #[error("Non-finite value in {modality} {stage} at index {index}: {value}")]
    NonFiniteValue {
        modality: Modality,
        stage: &'static str,
        index: usize,
        value: f32,
    },

    #[error("Non-finite {modality} stress indicator: {value}")]
    NonFiniteStress { modality: Modality, value: f32 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
