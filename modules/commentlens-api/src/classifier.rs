/// Inclusion-list vocabulary: a comment mentioning remedies, dosage changes,
/// or family testimonials is treated as high-value. Substring match, so
/// "med" also catches "medication" and "remedied".
const HIGH_VALUE_KEYWORDS: &[&str] = &[
    "med", "pill", "dose", "stop", "reduce", "mom", "dad", "grand", "healed", "fixed", "tea",
    "juice", "diet",
];

/// Deterministic relevance check, independent of the model step. Used for
/// the engagement stats and usable offline.
pub fn is_high_value(text: &str) -> bool {
    let lower = text.to_lowercase();
    HIGH_VALUE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
