//! Multimodal stress fusion for MindWatch.
//!
//! This crate turns up to four raw modality embeddings into a stress score,
//! a GREEN/AMBER/RED label, normalized modality weights, ranked factors and an
//! explanation. The encoders are non-learned placeholders behind the
//! [`Encoder`](mindwatch_core::Encoder) trait.
//!
//! # Architecture
//!
//! - **EncoderSet**: one `Encoder` per modality (`StandardizingEncoder` by default)
//! - **AttentionFusion**: fixed-weight attention fusion head
//! - **InferenceService**: validation, orchestration and response assembly
//!
//! # Example
//!
//! ```
//! use mindwatch_core::{InferenceRequest, Modality};
//! use mindwatch_fusion::InferenceService;
//!
//! let service = InferenceService::default();
//! let request = InferenceRequest::default()
//!     .with_embedding(Modality::Text, vec![0.1, 0.2, 0.3, 0.4]);
//! let response = service.infer(&request).unwrap();
//! assert!((0.0..=1.0).contains(&response.score));
//! assert_eq!(response.modality_weights.text, 1.0);
//! ```

pub mod encoder;
pub mod error;
pub mod explanation;
pub mod fusion;
pub mod service;

pub use encoder::{EncoderSet, StandardizingEncoder};
pub use error::{InferenceError, InferenceResult, NO_MODALITY_MESSAGE};
pub use fusion::{stress_indicator, AttentionFusion};
pub use service::InferenceService;
