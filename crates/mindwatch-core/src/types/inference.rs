//! Request and response value objects exchanged with the transport layer.
//!
//! Field names follow the JSON contract of the `/infer` endpoint: raw
//! embeddings are `hv`, `ha`, `ht`, `hc`, and response fields are camelCase.

use serde::{Deserialize, Serialize};

use crate::types::{Modality, ModalitySet, ModalityWeights, StressLabel, TopFactor};

/// Per-modality consent flags collected by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentState {
    pub vision: bool,
    pub audio: bool,
    pub text: bool,
    pub context: bool,
    /// Allow anonymized research logs.
    pub logs: bool,
}

impl ConsentState {
    /// Consent flag for one modality.
    pub fn allows(&self, modality: Modality) -> bool {
        match modality {
            Modality::Vision => self.vision,
            Modality::Audio => self.audio,
            Modality::Text => self.text,
            Modality::Context => self.context,
        }
    }
}

/// Opaque request metadata. Inference never reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestMeta {
    pub session_id: Option<String>,
    pub consent: ConsentState,
    pub timestamp: Option<String>,
}

/// Inference input: zero to four raw embeddings plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hv: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ha: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ht: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hc: Option<Vec<f32>>,
    /// Required on the wire; its fields are all optional.
    pub meta: RequestMeta,
}

impl InferenceRequest {
    /// Raw embedding supplied for `modality`, if any.
    pub fn raw(&self, modality: Modality) -> Option<&[f32]> {
        let field = match modality {
            Modality::Vision => &self.hv,
            Modality::Audio => &self.ha,
            Modality::Text => &self.ht,
            Modality::Context => &self.hc,
        };
        field.as_deref()
    }

    /// Embeddings that count as present: supplied and non-empty.
    pub fn present_embeddings(&self) -> ModalitySet<&[f32]> {
        let mut set = ModalitySet::new();
        for modality in Modality::ALL {
            if let Some(raw) = self.raw(modality).filter(|r| !r.is_empty()) {
                set.insert(modality, raw);
            }
        }
        set
    }

    /// Builder-style setter for one modality's raw embedding.
    #[must_use]
    pub fn with_embedding(mut self, modality: Modality, raw: Vec<f32>) -> Self {
        let field = match modality {
            Modality::Vision => &mut self.hv,
            Modality::Audio => &mut self.ha,
            Modality::Text => &mut self.ht,
            Modality::Context => &mut self.hc,
        };
        *field = Some(raw);
        self
    }
}

/// Inference output handed back to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResponse {
    /// Fused stress score in `[0, 1]`.
    pub score: f32,
    pub label: StressLabel,
    pub explanation: Vec<String>,
    pub modality_weights: ModalityWeights,
    pub top_factors: Vec<TopFactor>,
}
