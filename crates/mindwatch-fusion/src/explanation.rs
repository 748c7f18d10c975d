//! Human-readable explanation attached to every inference response.

use mindwatch_core::types::{Modality, StressLabel};

/// The two sentences describing the overall stress level.
pub fn summary_sentences(label: StressLabel) -> [&'static str; 2] {
    match label {
        StressLabel::Green => [
            "Your stress levels appear to be low.",
            "Keep up the good work and maintain healthy routines.",
        ],
        StressLabel::Amber => [
            "Your stress levels appear to be moderate.",
            "Consider taking a break or practicing relaxation techniques.",
        ],
        StressLabel::Red => [
            "Your stress levels appear to be elevated.",
            "Consider reaching out for support or taking immediate rest.",
        ],
    }
}

/// Sentence naming what was analyzed for one modality.
pub fn modality_sentence(modality: Modality) -> &'static str {
    match modality {
        Modality::Vision => "Facial features were analyzed for stress indicators.",
        Modality::Audio => "Voice features were analyzed for stress indicators.",
        Modality::Text => "Text sentiment was analyzed for stress indicators.",
        Modality::Context => "Contextual factors (location, time, noise) were considered.",
    }
}

/// Summary sentences followed by one sentence per present modality.
///
/// `present` should yield modalities in declaration order.
pub fn build_explanation(
    label: StressLabel,
    present: impl IntoIterator<Item = Modality>,
) -> Vec<String> {
    summary_sentences(label)
        .into_iter()
        .chain(present.into_iter().map(modality_sentence))
        .map(str::to_string)
        .collect()
}
