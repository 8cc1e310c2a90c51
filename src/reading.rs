//! Splits the text model's output into a takeaway and an answer.

/// Separates the takeaway from the answer in the model output.
pub const ANSWER_MARKER: &str = "Answer to question:";

/// Optional label in front of the takeaway.
pub const TAKEAWAY_MARKER: &str = "Takeaway:";

/// Takeaway shown when the model ignored the output format.
pub const FALLBACK_TAKEAWAY: &str = "Unable to generate takeaway due to response format.";

/// A parsed model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub takeaway: String,
    pub answer: String,
    /// `false` when the answer marker was missing and the fallback was used.
    pub well_formed: bool,
}

impl Reading {
    /// Split `raw` at the first answer marker. Without a marker the whole
    /// text becomes the answer and the takeaway falls back to a fixed message.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(ANSWER_MARKER) {
            Some((before, after)) => {
                let before = before.trim();
                let takeaway = before.strip_prefix(TAKEAWAY_MARKER).unwrap_or(before);
                Self {
                    takeaway: takeaway.trim().to_string(),
                    answer: after.trim().to_string(),
                    well_formed: true,
                }
            }
            None => Self {
                takeaway: FALLBACK_TAKEAWAY.to_string(),
                answer: raw.trim().to_string(),
                well_formed: false,
            },
        }
    }
}
