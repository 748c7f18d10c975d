//! Error types for inference operations.

use mindwatch_core::CoreError;
use thiserror::Error;

/// Message returned when a request carries no usable embedding.
pub const NO_MODALITY_MESSAGE: &str = "At least one modality embedding must be provided";

/// Inference failures surfaced to the transport layer.
///
/// Exactly two kinds: the request was unusable, or something broke while
/// encoding or fusing. Neither is retried.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Client-facing rejection (no modality supplied).
    #[error("{0}")]
    InvalidRequest(String),

    /// Unexpected failure during encode/fuse, carrying the underlying message.
    #[error("Inference failed: {0}")]
    Internal(String),
}

impl InferenceError {
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, InferenceError::InvalidRequest(_))
    }
}

impl From<CoreError> for InferenceError {
    fn from(err: CoreError) -> Self {
        InferenceError::Internal(err.to_string())
    }
}

/// Result type for inference operations.
pub type InferenceResult<T> = Result<T, InferenceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mindwatch_core::Modality;

    #[test]
    fn test_core_error_becomes_internal() {
        let err: InferenceError = CoreError::EmptyEmbedding {
            modality: Modality::Audio,
        }
        .into();
        assert!(!err.is_invalid_request());
        let msg = err.to_string();
        assert!(msg.starts_with("Inference failed: "));
        assert!(msg.contains("Empty audio embedding"));
    }

    #[test]
    fn test_invalid_request_message_is_verbatim() {
        let err = InferenceError::InvalidRequest(NO_MODALITY_MESSAGE.to_string());
        assert!(err.is_invalid_request());
        assert_eq!(err.to_string(), NO_MODALITY_MESSAGE);
    }
}
