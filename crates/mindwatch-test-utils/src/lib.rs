//! Shared test fixtures for MindWatch crates.
//!
//! - [`embeddings`]: deterministic and random raw embeddings
//! - [`requests`]: inference requests and their JSON wire form

pub mod embeddings;
pub mod requests;

pub use embeddings::{generate_embedding, random_embedding, repeat_pattern, uniform_embedding};
pub use requests::{
    all_modalities_request, empty_request, request_json, single_modality_request,
    tenths, text_only_request,
};
