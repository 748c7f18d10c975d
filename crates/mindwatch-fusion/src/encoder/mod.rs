//! Modality encoders.
//!
//! - [`StandardizingEncoder`]: the placeholder encoder used for every modality
//! - [`EncoderSet`]: one encoder per modality, selected by which embeddings a
//!   request carries
//!
//! ```text
//! raw embedding (any length ≥ 1)
//!        |
//!        v
//!   (x - mean) / (std + eps)
//!        |
//!        v
//!   pad with zeros / truncate  -->  EncodedVector[D]
//!                                   vision/audio D=64, text D=32, context D=16
//! ```

mod standardizing;

use std::fmt;
use std::sync::Arc;

use mindwatch_core::error::{CoreError, CoreResult};
use mindwatch_core::traits::Encoder;
use mindwatch_core::types::{EncodedVector, Modality, ModalitySet, NUM_MODALITIES};
use mindwatch_core::EncoderConfig;

pub use standardizing::{standardize_and_resize, StandardizingEncoder};

/// One encoder per modality.
///
/// Every slot is always filled; individual encoders can be swapped with
/// [`EncoderSet::with_encoder`] without touching fusion or the service.
#[derive(Clone)]
pub struct EncoderSet {
    encoders: [Arc<dyn Encoder>; NUM_MODALITIES],
}

impl EncoderSet {
    /// Standardizing encoders for all four modalities.
    pub fn standardizing(config: EncoderConfig) -> Self {
        Self {
            encoders: Modality::ALL.map(|modality| {
                Arc::new(StandardizingEncoder::new(modality, config)) as Arc<dyn Encoder>
            }),
        }
    }

    /// Replace the encoder for `encoder.modality()`.
    #[must_use]
    pub fn with_encoder(mut self, encoder: Arc<dyn Encoder>) -> Self {
        let slot = encoder.modality().index();
        self.encoders[slot] = encoder;
        self
    }

    pub fn get(&self, modality: Modality) -> &dyn Encoder {
        self.encoders[modality.index()].as_ref()
    }

    /// Encode every present embedding with its modality's encoder.
    ///
    /// Fails on the first encoder error. Also rejects encoder output tagged
    /// with the wrong modality.
    pub fn encode_all(&self, raw: &ModalitySet<&[f32]>) -> CoreResult<ModalitySet<EncodedVector>> {
        raw.try_map(|modality, embedding| {
            let encoder = self.get(modality);
            let encoded = encoder.encode(embedding)?;
            if encoded.modality() != modality {
                return Err(CoreError::Internal(format!(
                    "encoder '{}' registered for {} produced a {} vector",
                    encoder.name(),
                    modality,
                    encoded.modality()
                )));
            }
            tracing::debug!(
                encoder = encoder.name(),
                modality = %modality,
                input_len = embedding.len(),
                output_len = encoded.len(),
                "Encoded modality"
            );
            Ok(encoded)
        })
    }
}

impl Default for EncoderSet {
    fn default() -> Self {
        Self::standardizing(EncoderConfig::default())
    }
}

impl fmt::Debug for EncoderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.encoders.iter().map(|e| e.name()))
            .finish()
    }
}
