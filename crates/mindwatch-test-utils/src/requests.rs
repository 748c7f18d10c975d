//! Inference request builders.

use mindwatch_core::types::{InferenceRequest, Modality};
use serde_json::{json, Value};

use crate::embeddings::{repeat_pattern, uniform_embedding};

/// The values 0.1, 0.2, ..., 1.0.
pub fn tenths() -> Vec<f32> {
    (1..=10).map(|i| i as f32 / 10.0).collect()
}

pub fn empty_request() -> InferenceRequest {
    InferenceRequest::default()
}

/// Text-only request: `[0.1..=1.0]` repeated twice.
pub fn text_only_request() -> InferenceRequest {
    single_modality_request(Modality::Text, repeat_pattern(&tenths(), 2))
}

pub fn single_modality_request(modality: Modality, raw: Vec<f32>) -> InferenceRequest {
    InferenceRequest::default().with_embedding(modality, raw)
}

/// All four modalities with constant embeddings of differing lengths:
/// vision `0.1 x 32`, audio `0.2 x 32`, text `0.3 x 16`, context `0.4 x 8`.
pub fn all_modalities_request() -> InferenceRequest {
    InferenceRequest::default()
        .with_embedding(Modality::Vision, uniform_embedding(0.1, 32))
        .with_embedding(Modality::Audio, uniform_embedding(0.2, 32))
        .with_embedding(Modality::Text, uniform_embedding(0.3, 16))
        .with_embedding(Modality::Context, uniform_embedding(0.4, 8))
}

/// Wire-format JSON for `request`, with a session id and consent for every
/// modality present.
pub fn request_json(request: &InferenceRequest, session_id: &str) -> Value {
    let mut body = json!({
        "meta": {
            "sessionId": session_id,
            "consent": {
                "vision": request.hv.is_some(),
                "audio": request.ha.is_some(),
                "text": request.ht.is_some(),
                "context": request.hc.is_some(),
                "logs": false
            },
            "timestamp": "2024-01-01T00:00:00Z"
        }
    });
    for modality in Modality::ALL {
        if let Some(raw) = request.raw(modality) {
            body[modality.request_field()] = json!(raw);
        }
    }
    body
}
