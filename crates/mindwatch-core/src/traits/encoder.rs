//! Modality encoder trait.

use crate::error::CoreResult;
use crate::types::{EncodedVector, Modality};

/// Maps a raw modality embedding onto that modality's fixed-length vector.
///
/// Implementations hold only configuration and must be reentrant: the same
/// encoder instance is shared by every concurrent inference call.
///
/// # Example
///
/// ```rust,ignore
/// use mindwatch_core::traits::Encoder;
///
/// let encoded = encoder.encode(&[0.1, 0.2, 0.3])?;
/// assert_eq!(encoded.len(), encoder.dimension());
/// ```
pub trait Encoder: Send + Sync {
    /// Encode one raw embedding.
    ///
    /// The returned vector always has length [`Encoder::dimension`].
    fn encode(&self, raw: &[f32]) -> CoreResult<EncodedVector>;

    /// Modality this encoder serves.
    fn modality(&self) -> Modality;

    /// Output dimension. Defaults to the modality's target dimension.
    fn dimension(&self) -> usize {
        self.modality().target_dimension()
    }

    /// Identifier used in logs.
    fn name(&self) -> &str;
}
