//! Input modalities and the per-modality container used across the pipeline.
//!
//! The declaration order `Vision, Audio, Text, Context` is significant: it is
//! the iteration order of [`ModalitySet`], the order of explanation sentences,
//! and the tie-break order when ranking top factors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output dimension of the vision encoder.
pub const VISION_DIM: usize = 64;
/// Output dimension of the audio encoder.
pub const AUDIO_DIM: usize = 64;
/// Output dimension of the text encoder.
pub const TEXT_DIM: usize = 32;
/// Output dimension of the context encoder.
pub const CONTEXT_DIM: usize = 16;

/// Number of supported modalities.
pub const NUM_MODALITIES: usize = 4;

/// One of the four input channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Vision,
    Audio,
    Text,
    Context,
}

impl Modality {
    /// All modalities in declaration order.
    pub const ALL: [Modality; NUM_MODALITIES] = [
        Modality::Vision,
        Modality::Audio,
        Modality::Text,
        Modality::Context,
    ];

    /// Lower-case modality name (`"vision"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Modality::Vision => "vision",
            Modality::Audio => "audio",
            Modality::Text => "text",
            Modality::Context => "context",
        }
    }

    /// Capitalized name used in factor descriptions.
    pub const fn display_name(self) -> &'static str {
        match self {
            Modality::Vision => "Vision",
            Modality::Audio => "Audio",
            Modality::Text => "Text",
            Modality::Context => "Context",
        }
    }

    /// Single-letter code used as the key of `modalityWeights`.
    pub const fn code(self) -> &'static str {
        match self {
            Modality::Vision => "v",
            Modality::Audio => "a",
            Modality::Text => "t",
            Modality::Context => "c",
        }
    }

    /// Name of the request field carrying this modality's raw embedding.
    pub const fn request_field(self) -> &'static str {
        match self {
            Modality::Vision => "hv",
            Modality::Audio => "ha",
            Modality::Text => "ht",
            Modality::Context => "hc",
        }
    }

    /// Fixed length of this modality's encoded vector.
    pub const fn target_dimension(self) -> usize {
        match self {
            Modality::Vision => VISION_DIM,
            Modality::Audio => AUDIO_DIM,
            Modality::Text => TEXT_DIM,
            Modality::Context => CONTEXT_DIM,
        }
    }

    /// Multiplier applied to the raw statistic when deriving the stress indicator.
    pub const fn stress_scale(self) -> f32 {
        match self {
            Modality::Vision => 0.5,
            Modality::Audio => 0.4,
            Modality::Text => 0.6,
            Modality::Context => 0.3,
        }
    }

    /// Position in declaration order.
    pub const fn index(self) -> usize {
        match self {
            Modality::Vision => 0,
            Modality::Audio => 1,
            Modality::Text => 2,
            Modality::Context => 3,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four optional slots, one per modality.
///
/// Iteration always follows declaration order regardless of the order in
/// which slots were filled.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalitySet<T> {
    slots: [Option<T>; NUM_MODALITIES],
}

impl<T> Default for ModalitySet<T> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }
}

impl<T> ModalitySet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, modality: Modality, value: T) -> Self {
        self.insert(modality, value);
        self
    }

    /// Put a value in the slot for `modality`, returning the previous one.
    pub fn insert(&mut self, modality: Modality, value: T) -> Option<T> {
        self.slots[modality.index()].replace(value)
    }

    pub fn get(&self, modality: Modality) -> Option<&T> {
        self.slots[modality.index()].as_ref()
    }

    pub fn contains(&self, modality: Modality) -> bool {
        self.slots[modality.index()].is_some()
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Filled slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Modality, &T)> + '_ {
        Modality::ALL
            .into_iter()
            .filter_map(move |m| self.get(m).map(|v| (m, v)))
    }

    /// Modalities whose slot is filled, in declaration order.
    pub fn present(&self) -> impl Iterator<Item = Modality> + '_ {
        self.iter().map(|(m, _)| m)
    }

    /// Apply a fallible function to every filled slot, stopping at the first error.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<ModalitySet<U>, E>
    where
        F: FnMut(Modality, &T) -> Result<U, E>,
    {
        let mut out = ModalitySet::new();
        for (modality, value) in self.iter() {
            out.insert(modality, f(modality, value)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_dimensions() {
        assert_eq!(Modality::Vision.target_dimension(), 64);
        assert_eq!(Modality::Audio.target_dimension(), 64);
        assert_eq!(Modality::Text.target_dimension(), 32);
        assert_eq!(Modality::Context.target_dimension(), 16);
    }

    #[test]
    fn test_codes_and_fields() {
        let codes: Vec<_> = Modality::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, ["v", "a", "t", "c"]);
        let fields: Vec<_> = Modality::ALL.iter().map(|m| m.request_field()).collect();
        assert_eq!(fields, ["hv", "ha", "ht", "hc"]);
    }

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, m) in Modality::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        assert!(Modality::Vision < Modality::Context);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Modality::Context).unwrap();
        assert_eq!(json, "\"context\"");
        let back: Modality = serde_json::from_str("\"audio\"").unwrap();
        assert_eq!(back, Modality::Audio);
    }

    #[test]
    fn test_set_iterates_in_declaration_order() {
        let set = ModalitySet::new()
            .with(Modality::Context, 4)
            .with(Modality::Vision, 1)
            .with(Modality::Text, 3);

        let order: Vec<_> = set.iter().map(|(m, v)| (m, *v)).collect();
        assert_eq!(
            order,
            vec![(Modality::Vision, 1), (Modality::Text, 3), (Modality::Context, 4)]
        );
        assert_eq!(set.len(), 3);
        assert!(!set.contains(Modality::Audio));
    }

    #[test]
    fn test_empty_set() {
        let set: ModalitySet<u8> = ModalitySet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_try_map_short_circuits() {
        let set = ModalitySet::new()
            .with(Modality::Vision, 1)
            .with(Modality::Audio, -1)
            .with(Modality::Text, 2);

        let mut visited = Vec::new();
        let result: Result<ModalitySet<i32>, String> = set.try_map(|m, v| {
            visited.push(m);
            if *v < 0 {
                Err(format!("{m} negative"))
            } else {
                Ok(v * 10)
            }
        });

        assert_eq!(result.unwrap_err(), "audio negative");
        assert_eq!(visited, vec![Modality::Vision, Modality::Audio]);
    }
}
