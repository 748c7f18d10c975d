//! Placeholder encoder: standardize, then pad or truncate.

use mindwatch_core::error::{CoreError, CoreResult};
use mindwatch_core::traits::Encoder;
use mindwatch_core::types::{EncodedVector, Modality};
use mindwatch_core::EncoderConfig;

/// Standardize `raw` to zero mean and unit variance, then resize to `dimension`.
///
/// Each element becomes `(x - mean) / (std + epsilon)` using the population
/// standard deviation. Shorter inputs are right-padded with zeros, longer
/// ones truncated.
///
/// Statistics accumulate in f64. For constant input the mean is then exact,
/// so every standardized value is exactly zero.
///
/// `raw` must be non-empty.
pub fn standardize_and_resize(raw: &[f32], dimension: usize, epsilon: f64) -> Vec<f32> {
    let n = raw.len() as f64;
    let mean = raw.iter().map(|&x| f64::from(x)).sum::<f64>() / n;
    let variance = raw
        .iter()
        .map(|&x| {
            let d = f64::from(x) - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let denom = variance.sqrt() + epsilon;

    let mut out: Vec<f32> = raw
        .iter()
        .take(dimension)
        .map(|&x| ((f64::from(x) - mean) / denom) as f32)
        .collect();
    out.resize(dimension, 0.0);
    out
}

/// Non-learned encoder shared by all four modalities.
///
/// Only the target dimension differs between modalities; it comes from
/// [`Modality::target_dimension`].
#[derive(Debug, Clone)]
pub struct StandardizingEncoder {
    modality: Modality,
    epsilon: f64,
    name: String,
}

impl StandardizingEncoder {
    pub fn new(modality: Modality, config: EncoderConfig) -> Self {
        Self {
            modality,
            epsilon: config.epsilon,
            name: format!("standardizing-{}-v1", modality),
        }
    }

    pub fn with_defaults(modality: Modality) -> Self {
        Self::new(modality, EncoderConfig::default())
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Encoder for StandardizingEncoder {
    fn encode(&self, raw: &[f32]) -> CoreResult<EncodedVector> {
        if raw.is_empty() {
            return Err(CoreError::EmptyEmbedding {
                modality: self.modality,
            });
        }

        let values = standardize_and_resize(raw, self.dimension(), self.epsilon);

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CoreError::NonFiniteValue {
                modality: self.modality,
                stage: "encoding",
                index,
                value,
            });
        }

        EncodedVector::new(self.modality, values)
    }

    fn modality(&self) -> Modality {
        self.modality
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_length_matches_modality() {
        for modality in Modality::ALL {
            let encoder = StandardizingEncoder::with_defaults(modality);
            for len in [1, 5, 16, 32, 64, 100] {
                let raw: Vec<f32> = (0..len).map(|i| i as f32 * 0.1).collect();
                let encoded = encoder.encode(&raw).unwrap();
                assert_eq!(
                    encoded.len(),
                    modality.target_dimension(),
                    "{modality} with {len} raw values"
                );
            }
        }
    }

    #[test]
    fn test_single_value_encodes_to_zeros() {
        let encoder = StandardizingEncoder::with_defaults(Modality::Text);
        let encoded = encoder.encode(&[7.5]).unwrap();
        assert!(encoded.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_constant_input_encodes_to_zeros() {
        let encoder = StandardizingEncoder::with_defaults(Modality::Vision);
        for value in [0.1f32, 0.2, 0.3, 1.0 / 3.0, -42.125] {
            for len in [3usize, 7, 32, 100] {
                let encoded = encoder.encode(&vec![value; len]).unwrap();
                assert!(
                    encoded.as_slice().iter().all(|&v| v == 0.0),
                    "constant {value} x {len} must standardize to exact zeros"
                );
            }
        }
    }

    #[test]
    fn test_standardization_values() {
        // mean = 2.5, population std = sqrt(1.25)
        let out = standardize_and_resize(&[1.0, 2.0, 3.0, 4.0], 6, 1e-8);
        let std = 1.25f64.sqrt();
        let expected = [
            (-1.5 / std) as f32,
            (-0.5 / std) as f32,
            (0.5 / std) as f32,
            (1.5 / std) as f32,
            0.0,
            0.0,
        ];
        for (got, want) in out.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_truncation_keeps_leading_values() {
        let raw: Vec<f32> = (0..40).map(|i| i as f32).collect();
        let full = standardize_and_resize(&raw, 40, 1e-8);
        let truncated = standardize_and_resize(&raw, 16, 1e-8);
        assert_eq!(truncated.as_slice(), &full[..16]);
    }

    #[test]
    fn test_statistics_use_whole_input_before_truncation() {
        // The first 16 values alone would standardize differently.
        let mut raw = vec![0.0f32; 16];
        raw.extend(vec![10.0f32; 16]);
        let encoded = standardize_and_resize(&raw, 16, 1e-8);
        assert!(encoded.iter().all(|&v| (v + 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_empty_input_rejected() {
        let encoder = StandardizingEncoder::with_defaults(Modality::Audio);
        let err = encoder.encode(&[]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::EmptyEmbedding {
                modality: Modality::Audio
            }
        ));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let encoder = StandardizingEncoder::with_defaults(Modality::Context);
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = encoder.encode(&[0.1, bad, 0.3]).unwrap_err();
            assert!(
                matches!(err, CoreError::NonFiniteValue { stage: "encoding", .. }),
                "{bad} must be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let encoder = StandardizingEncoder::with_defaults(Modality::Audio);
        let raw = [0.3f32, -1.2, 4.4, 0.0, 2.2];
        let e1 = encoder.encode(&raw).unwrap();
        let e2 = encoder.encode(&raw).unwrap();
        assert_eq!(e1, e2);
    }

    #[test]
    fn test_name_and_dimension() {
        let encoder = StandardizingEncoder::with_defaults(Modality::Context);
        assert_eq!(encoder.name(), "standardizing-context-v1");
        assert_eq!(encoder.dimension(), 16);
        assert_eq!(encoder.epsilon(), 1e-8);
    }
}
