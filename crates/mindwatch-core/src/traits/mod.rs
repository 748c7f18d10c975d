//! Core traits.
//!
//! - [`Encoder`]: raw embedding → fixed-length encoded vector, one per modality

mod encoder;

pub use encoder::Encoder;
