//! Text metrics over the final extracted content

/// Character and word counts for a piece of extracted text
///
/// Counts are in characters (not bytes), so multi-byte scripts measure the
/// way a reader would count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub char_with_space: usize,
    pub char_without_space: usize,
    pub word_count: usize,
}

impl TextMetrics {
    /// Derives metrics from the given text
    pub fn from_text(text: &str) -> Self {
        TextMetrics {
            char_with_space: text.chars().count(),
            char_without_space: text.chars().filter(|c| !c.is_whitespace()).count(),
            word_count: text.split_whitespace().count(),
        }
    }
}
