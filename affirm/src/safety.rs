//! Keyword safety fallback.
//!
//! This is a coarse, English-only substring check, not a self-harm classifier. False
//! positives and false negatives are both expected. Its only job is to keep obvious cases
//! away from the model and answer them with a fixed supportive message instead.

/// Lower-case substrings that trigger the fallback.
pub const SELF_HARM_MARKERS: [&str; 6] = [
    "suicid",
    "kill myself",
    "hurt myself",
    "end it",
    "self harm",
    "self-harm",
];

/// True when the lower-cased `text` contains any of [`SELF_HARM_MARKERS`].
pub fn looks_like_self_harm(text: &str) -> bool {
    let lowered = text.to_lowercase();
    SELF_HARM_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Fixed response for flagged requests. Never calls out to the model.
pub fn safety_message(name: &str) -> String {
    format!(
        "{name}, I’m really sorry you’re feeling this way. \
         You deserve support right now—please consider reaching out to a trusted person \
         or a qualified professional. You don’t have to handle this alone."
    )
}
