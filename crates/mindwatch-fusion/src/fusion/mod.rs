//! Attention fusion of encoded modality vectors.
//!
//! - [`AttentionFusion`]: combines per-modality stress indicators with fixed,
//!   normalized attention weights into a clamped score, label and top factors
//! - [`stress_indicator`]: the per-modality scalar fed into fusion

mod attention;

pub use attention::{stress_indicator, AttentionFusion};
