//! Fixed-length encoder output.

use crate::error::{CoreError, CoreResult};
use crate::types::Modality;

/// Encoded representation of one modality's embedding.
///
/// The length always equals `modality.target_dimension()`; construction with
/// any other length fails, so downstream code never re-checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedVector {
    modality: Modality,
    values: Vec<f32>,
}

impl EncodedVector {
    /// Wrap `values` as the encoded vector of `modality`.
    ///
    /// # Errors
    ///
    /// `CoreError::DimensionMismatch` if `values.len()` differs from the
    /// modality's target dimension.
    pub fn new(modality: Modality, values: Vec<f32>) -> CoreResult<Self> {
        let expected = modality.target_dimension();
        if values.len() != expected {
            return Err(CoreError::DimensionMismatch {
                modality,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { modality, values })
    }

    #[inline]
    pub fn modality(&self) -> Modality {
        self.modality
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: every modality has a non-zero target dimension.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the components.
    pub fn mean(&self) -> f32 {
        self.values.iter().sum::<f32>() / self.values.len() as f32
    }

    /// Mean of the absolute values of the components.
    pub fn mean_abs(&self) -> f32 {
        self.values.iter().map(|v| v.abs()).sum::<f32>() / self.values.len() as f32
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.values
    }
}
