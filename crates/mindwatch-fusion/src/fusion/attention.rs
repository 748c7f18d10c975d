//! Fixed-weight attention fusion.
//!
//! ```text
//! encoded vectors (present modalities only)
//!        |
//!        v
//!   [stress indicator per modality]
//!        |
//!        v
//!   [weights / sum(weights of present modalities)]
//!        |
//!        v
//!   [Σ indicator × weight, clamp to [0, 1]] --> score --> label
//!        |
//!        v
//!   [stable sort by impact desc, take 3] --> top factors
//! ```

use std::cmp::Ordering;

use tracing::{debug, warn};

use mindwatch_core::error::{CoreError, CoreResult};
use mindwatch_core::types::{
    EncodedVector, FusionResult, Modality, ModalityReading, ModalitySet, ModalityWeights,
    StressLabel, TopFactor, MAX_TOP_FACTORS,
};
use mindwatch_core::AttentionWeights;

/// Per-modality stress indicator of an encoded vector.
///
/// | Modality | Indicator |
/// |----------|-----------|
/// | vision | `mean(|v|) × 0.5` |
/// | audio | `mean(|a|) × 0.4` |
/// | text | `max(0, -mean(t)) × 0.6` (negative polarity raises stress) |
/// | context | `mean(c) × 0.3` |
pub fn stress_indicator(encoded: &EncodedVector) -> f32 {
    let modality = encoded.modality();
    let statistic = match modality {
        Modality::Vision | Modality::Audio => encoded.mean_abs(),
        Modality::Text => (-encoded.mean()).max(0.0),
        Modality::Context => encoded.mean(),
    };
    statistic * modality.stress_scale()
}

/// Attention fusion head with weights fixed at construction.
///
/// Holds no per-request state; `fuse` is reentrant.
#[derive(Debug, Clone)]
pub struct AttentionFusion {
    weights: AttentionWeights,
}

impl AttentionFusion {
    /// Create a fusion head with the given attention weights.
    ///
    /// # Errors
    ///
    /// `CoreError::ConfigError` if any weight is non-finite or not positive.
    pub fn new(weights: AttentionWeights) -> CoreResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Fusion head with the default 0.3/0.3/0.2/0.2 weights.
    pub fn with_defaults() -> Self {
        Self {
            weights: AttentionWeights::default(),
        }
    }

    pub fn weights(&self) -> &AttentionWeights {
        &self.weights
    }

    /// Fuse the encoded vectors of the present modalities.
    ///
    /// With no modality present this returns zero weights and the default
    /// score of 0.5. The service rejects such requests before reaching here.
    ///
    /// # Errors
    ///
    /// - `CoreError::NonFiniteStress` if a modality's indicator is NaN/Inf
    /// - `CoreError::Internal` if the fused score is not finite
    pub fn fuse(&self, encoded: &ModalitySet<EncodedVector>) -> CoreResult<FusionResult> {
        if encoded.is_empty() {
            warn!("Fusion called with no modalities; returning default score");
            return Ok(FusionResult::no_modalities());
        }

        let total_weight: f32 = encoded.present().map(|m| self.weights.weight(m)).sum();

        let mut readings = Vec::with_capacity(encoded.len());
        let mut modality_weights = ModalityWeights::default();

        for (modality, vector) in encoded.iter() {
            let indicator = stress_indicator(vector);
            if !indicator.is_finite() {
                return Err(CoreError::NonFiniteStress {
                    modality,
                    value: indicator,
                });
            }

            let weight = self.weights.weight(modality) / total_weight;
            modality_weights.set(modality, weight);

            let reading = ModalityReading {
                modality,
                stress_indicator: indicator,
                weight,
            };
            debug!(
                modality = %modality,
                stress_indicator = indicator,
                weight,
                impact = reading.impact(),
                "Modality reading"
            );
            readings.push(reading);
        }

        let raw_score: f32 = readings.iter().map(ModalityReading::impact).sum();
        if !raw_score.is_finite() {
            return Err(CoreError::Internal(format!(
                "fused stress score is not finite: {}",
                raw_score
            )));
        }
        let stress_score = raw_score.clamp(0.0, 1.0);

        Ok(FusionResult {
            stress_score,
            label: StressLabel::from_score(stress_score),
            modality_weights,
            top_factors: rank_factors(&readings),
            readings,
        })
    }
}

impl Default for AttentionFusion {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Highest-impact readings first, at most [`MAX_TOP_FACTORS`].
///
/// `sort_by` is stable and readings arrive in declaration order, so equal
/// impacts stay in vision, audio, text, context order.
fn rank_factors(readings: &[ModalityReading]) -> Vec<TopFactor> {
    let mut ranked: Vec<&ModalityReading> = readings.iter().collect();
    ranked.sort_by(|a, b| {
        b.impact()
            .partial_cmp(&a.impact())
            .unwrap_or(Ordering::Equal)
    });
    ranked
        .into_iter()
        .take(MAX_TOP_FACTORS)
        .map(TopFactor::from_reading)
        .collect()
}
