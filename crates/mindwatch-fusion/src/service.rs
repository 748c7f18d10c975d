//! Inference service: validation, encoder selection, fusion and response assembly.

use tracing::{error, info, warn};

use mindwatch_core::error::CoreResult;
use mindwatch_core::types::{
    EncodedVector, FusionResult, InferenceRequest, InferenceResponse, ModalitySet,
};
use mindwatch_core::Config;

use crate::encoder::EncoderSet;
use crate::error::{InferenceError, InferenceResult, NO_MODALITY_MESSAGE};
use crate::explanation::build_explanation;
use crate::fusion::AttentionFusion;

/// Stateless orchestrator around the encoders and the fusion head.
///
/// Read-only after construction and `Send + Sync`; share one instance behind
/// an `Arc` across concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct InferenceService {
    encoders: EncoderSet,
    fusion: AttentionFusion,
}

impl InferenceService {
    pub fn new(encoders: EncoderSet, fusion: AttentionFusion) -> Self {
        Self { encoders, fusion }
    }

    /// Build standardizing encoders and the fusion head from configuration.
    ///
    /// # Errors
    ///
    /// `CoreError::ConfigError` if the attention weights are invalid.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let encoders = EncoderSet::standardizing(config.encoder);
        let fusion = AttentionFusion::new(config.fusion)?;
        Ok(Self::new(encoders, fusion))
    }

    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }

    pub fn fusion(&self) -> &AttentionFusion {
        &self.fusion
    }

    /// Run one inference.
    ///
    /// # Errors
    ///
    /// - `InferenceError::InvalidRequest` if no embedding is present
    ///   (missing and empty embeddings both count as absent)
    /// - `InferenceError::Internal` if encoding or fusion fails
    pub fn infer(&self, request: &InferenceRequest) -> InferenceResult<InferenceResponse> {
        let raw = request.present_embeddings();
        if raw.is_empty() {
            warn!("Rejected inference request with no modality embeddings");
            return Err(InferenceError::InvalidRequest(NO_MODALITY_MESSAGE.to_string()));
        }

        let result = self.encode_and_fuse(&raw).map_err(|e| {
            error!("Inference error: {}", e);
            InferenceError::from(e)
        })?;

        let explanation = build_explanation(result.label, raw.present());

        info!(
            score = result.stress_score,
            label = %result.label,
            modalities = raw.len(),
            "Inference completed: score={:.3}, label={}",
            result.stress_score,
            result.label
        );

        Ok(InferenceResponse {
            score: result.stress_score,
            label: result.label,
            explanation,
            modality_weights: result.modality_weights,
            top_factors: result.top_factors,
        })
    }

    fn encode_and_fuse(&self, raw: &ModalitySet<&[f32]>) -> CoreResult<FusionResult> {
        let encoded: ModalitySet<EncodedVector> = self.encoders.encode_all(raw)?;
        self.fusion.fuse(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindwatch_core::types::{Modality, StressLabel};
    use mindwatch_core::AttentionWeights;

    fn request() -> InferenceRequest {
        InferenceRequest::default()
    }

    #[test]
    fn test_no_embeddings_is_invalid_request() {
        let service = InferenceService::default();
        let err = service.infer(&request()).unwrap_err();
        assert!(err.is_invalid_request());
        assert!(err.to_string().to_lowercase().contains("at least one modality"));
    }

    #[test]
    fn test_only_empty_embeddings_is_invalid_request() {
        let service = InferenceService::default();
        let req = request()
            .with_embedding(Modality::Vision, vec![])
            .with_embedding(Modality::Text, vec![]);
        assert!(service.infer(&req).unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_empty_embedding_ignored_next_to_present_one() {
        let service = InferenceService::default();
        let req = request()
            .with_embedding(Modality::Vision, vec![])
            .with_embedding(Modality::Audio, vec![0.1, 0.2, 0.3]);
        let response = service.infer(&req).unwrap();
        assert_eq!(response.modality_weights.vision, 0.0);
        assert_eq!(response.modality_weights.audio, 1.0);
        assert_eq!(response.top_factors.len(), 1);
    }

    #[test]
    fn test_non_finite_input_is_internal_error() {
        let service = InferenceService::default();
        let req = request().with_embedding(Modality::Context, vec![0.1, f32::INFINITY]);
        let err = service.infer(&req).unwrap_err();
        assert!(!err.is_invalid_request());
        assert!(err.to_string().starts_with("Inference failed: "));
        assert!(err.to_string().contains("context"));
    }

    #[test]
    fn test_constant_vision_is_green() {
        let service = InferenceService::default();
        let req = request().with_embedding(Modality::Vision, vec![0.42; 20]);
        let response = service.infer(&req).unwrap();

        assert_eq!(response.score, 0.0);
        assert_eq!(response.label, StressLabel::Green);
        assert_eq!(response.modality_weights.vision, 1.0);
        assert_eq!(response.top_factors.len(), 1);
        assert_eq!(response.top_factors[0].impact, 0.0);
        assert_eq!(
            response.explanation,
            vec![
                "Your stress levels appear to be low.",
                "Keep up the good work and maintain healthy routines.",
                "Facial features were analyzed for stress indicators.",
            ]
        );
    }

    #[test]
    fn test_explanation_lists_present_modalities_in_order() {
        let service = InferenceService::default();
        let req = request()
            .with_embedding(Modality::Context, vec![0.1, 0.9])
            .with_embedding(Modality::Audio, vec![0.3, 0.2, 0.1]);
        let response = service.infer(&req).unwrap();
        assert_eq!(response.explanation.len(), 4);
        assert_eq!(
            response.explanation[2],
            "Voice features were analyzed for stress indicators."
        );
        assert_eq!(
            response.explanation[3],
            "Contextual factors (location, time, noise) were considered."
        );
    }

    #[test]
    fn test_from_config_uses_weights() {
        let mut config = Config::default();
        config.fusion = AttentionWeights {
            vision: 2.0,
            audio: 1.0,
            text: 1.0,
            context: 1.0,
        };
        let service = InferenceService::from_config(&config).unwrap();
        let req = request()
            .with_embedding(Modality::Vision, vec![1.0, 2.0])
            .with_embedding(Modality::Audio, vec![1.0, 2.0]);
        let response = service.infer(&req).unwrap();
        assert!((response.modality_weights.vision - 2.0 / 3.0).abs() < 1e-6);
        assert!((response.modality_weights.audio - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_config_rejects_invalid_weights() {
        let mut config = Config::default();
        config.fusion.audio = 0.0;
        assert!(InferenceService::from_config(&config).is_err());
    }

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InferenceService>();
    }
}
