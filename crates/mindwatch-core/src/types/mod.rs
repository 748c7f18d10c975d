//! Domain types shared by encoders, the fusion engine and the transport layer.

mod encoded;
mod fusion;
mod inference;
mod modality;

pub use encoded::EncodedVector;
pub use fusion::{
    FusionResult, ModalityReading, ModalityWeights, StressLabel, StressTier, TopFactor,
    AMBER_THRESHOLD, HIGH_TIER_THRESHOLD, MAX_TOP_FACTORS, MODERATE_TIER_THRESHOLD,
    NO_MODALITY_DEFAULT_SCORE, RED_THRESHOLD,
};
pub use inference::{ConsentState, InferenceRequest, InferenceResponse, RequestMeta};
pub use modality::{
    Modality, ModalitySet, AUDIO_DIM, CONTEXT_DIM, NUM_MODALITIES, TEXT_DIM, VISION_DIM,
};
