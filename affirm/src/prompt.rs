//! Fixed prompt contract sent to the generator.

/// System instruction: tone, length, and safety rules for every generated affirmation.
pub const SYSTEM_PROMPT: &str = "You generate short, supportive, non-clinical therapeutic affirmations.

Rules:
- No medical or legal advice. No diagnosis.
- No crisis counseling or instructions.
- If the user expresses self-harm intent, respond with a brief supportive message encouraging them to seek professional help or reach out to a trusted person.
- Keep responses 2–4 sentences, warm, specific to the user's name and feeling.
";

/// Placeholder for empty details.
pub const NO_DETAILS: &str = "N/A";

/// Per-request user message. Inputs are expected to be trimmed already.
pub fn user_prompt(name: &str, feeling: &str, details: &str) -> String {
    let details = if details.is_empty() { NO_DETAILS } else { details };
    format!(
        "User name: {name}\n\
         Feeling: {feeling}\n\
         Details (optional): {details}\n\
         Write the affirmation now."
    )
}
