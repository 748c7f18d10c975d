//! Fusion output types: label, per-modality readings, weights and factors.
//!
//! # Thresholds
//!
//! | Applies to | Value | Meaning |
//! |------------|-------|---------|
//! | fused score | `< 0.33` | GREEN |
//! | fused score | `0.33 ..< 0.67` | AMBER |
//! | fused score | `>= 0.67` | RED |
//! | stress indicator | `> 0.5` | "high" factor tier |
//! | stress indicator | `> 0.3` | "moderate" factor tier |
//!
//! The factor tiers look at a single modality's raw indicator, never at the
//! fused score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Modality;

/// Scores below this are GREEN.
pub const AMBER_THRESHOLD: f32 = 0.33;
/// Scores at or above this are RED.
pub const RED_THRESHOLD: f32 = 0.67;

/// Indicators above this describe a "high" factor.
pub const HIGH_TIER_THRESHOLD: f32 = 0.5;
/// Indicators above this (and not high) describe a "moderate" factor.
pub const MODERATE_TIER_THRESHOLD: f32 = 0.3;

/// Maximum number of top factors reported.
pub const MAX_TOP_FACTORS: usize = 3;

/// Score reported when no modality contributed.
pub const NO_MODALITY_DEFAULT_SCORE: f32 = 0.5;

/// Tri-level categorical stress label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StressLabel {
    Green,
    Amber,
    Red,
}

impl StressLabel {
    /// Label for a fused score. Lower bounds are inclusive.
    pub fn from_score(score: f32) -> Self {
        if score < AMBER_THRESHOLD {
            StressLabel::Green
        } else if score < RED_THRESHOLD {
            StressLabel::Amber
        } else {
            StressLabel::Red
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StressLabel::Green => "GREEN",
            StressLabel::Amber => "AMBER",
            StressLabel::Red => "RED",
        }
    }
}

impl fmt::Display for StressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wording tier of a factor description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressTier {
    Low,
    Moderate,
    High,
}

impl StressTier {
    pub fn from_indicator(stress_indicator: f32) -> Self {
        if stress_indicator > HIGH_TIER_THRESHOLD {
            StressTier::High
        } else if stress_indicator > MODERATE_TIER_THRESHOLD {
            StressTier::Moderate
        } else {
            StressTier::Low
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StressTier::Low => "low",
            StressTier::Moderate => "moderate",
            StressTier::High => "high",
        }
    }
}

/// Stress indicator and normalized attention weight of one present modality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalityReading {
    pub modality: Modality,
    pub stress_indicator: f32,
    pub weight: f32,
}

impl ModalityReading {
    /// Contribution of this modality to the fused score.
    #[inline]
    pub fn impact(&self) -> f32 {
        self.stress_indicator * self.weight
    }
}

/// Normalized attention weights keyed by single-letter modality code.
///
/// All four keys are always serialized; absent modalities report `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModalityWeights {
    #[serde(rename = "v")]
    pub vision: f32,
    #[serde(rename = "a")]
    pub audio: f32,
    #[serde(rename = "t")]
    pub text: f32,
    #[serde(rename = "c")]
    pub context: f32,
}

impl ModalityWeights {
    pub fn get(&self, modality: Modality) -> f32 {
        match modality {
            Modality::Vision => self.vision,
            Modality::Audio => self.audio,
            Modality::Text => self.text,
            Modality::Context => self.context,
        }
    }

    pub fn set(&mut self, modality: Modality, weight: f32) {
        match modality {
            Modality::Vision => self.vision = weight,
            Modality::Audio => self.audio = weight,
            Modality::Text => self.text = weight,
            Modality::Context => self.context = weight,
        }
    }

    pub fn sum(&self) -> f32 {
        self.vision + self.audio + self.text + self.context
    }
}

/// A ranked contributor to the fused score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFactor {
    pub modality: Modality,
    pub impact: f32,
    pub description: String,
}

impl TopFactor {
    /// Build the factor for a reading, e.g.
    /// `"Audio features indicate moderate stress levels"`.
    pub fn from_reading(reading: &ModalityReading) -> Self {
        let tier = StressTier::from_indicator(reading.stress_indicator);
        Self {
            modality: reading.modality,
            impact: reading.impact(),
            description: format!(
                "{} features indicate {} stress levels",
                reading.modality.display_name(),
                tier.as_str()
            ),
        }
    }
}

/// Output of one fusion pass. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionResult {
    pub stress_score: f32,
    pub label: StressLabel,
    pub modality_weights: ModalityWeights,
    pub top_factors: Vec<TopFactor>,
    pub readings: Vec<ModalityReading>,
}

impl FusionResult {
    /// Result when no modality contributed: zero weights, default score.
    pub fn no_modalities() -> Self {
        Self {
            stress_score: NO_MODALITY_DEFAULT_SCORE,
            label: StressLabel::from_score(NO_MODALITY_DEFAULT_SCORE),
            modality_weights: ModalityWeights::default(),
            top_factors: Vec::new(),
            readings: Vec::new(),
        }
    }
}
