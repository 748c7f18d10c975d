//! MindWatch Core Library
//!
//! Domain types, traits, errors and configuration for multimodal stress
//! inference.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Modality`, `ModalitySet`, `EncodedVector`, `FusionResult`, ...)
//! - The `Encoder` trait implemented by per-modality encoders
//! - Request/response value objects exchanged with the transport layer
//! - Error types and result aliases
//! - Layered configuration (`Config`)
//!
//! # Example
//!
//! ```
//! use mindwatch_core::types::{Modality, StressLabel};
//!
//! assert_eq!(Modality::Text.target_dimension(), 32);
//! assert_eq!(StressLabel::from_score(0.5), StressLabel::Amber);
//! ```

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{AttentionWeights, Config, EncoderConfig};
pub use error::{CoreError, CoreResult};
pub use traits::Encoder;
pub use types::{
    EncodedVector, FusionResult, InferenceRequest, InferenceResponse, Modality, ModalitySet,
    StressLabel,
};
