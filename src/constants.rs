//! Analysis constants.
//!
//! Centralizes the fixed word lists and heuristic thresholds so the engine
//! modules share a single source of truth.

/// Significant-word extraction constants.
pub mod words {
    /// Function words excluded from thematic comparison.
    pub const STOPWORDS: &[&str] = &[
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "as", "is", "was", "are", "were", "be",
    ];

    /// Minimum length (in characters) for a token to count as significant.
    pub const MIN_SIGNIFICANT_LEN: usize = 4;
}

/// Rhyme extraction and scheme-scoring constants.
pub mod rhyme {
    /// Minimum rhyme-ending length for a comparison to be meaningful.
    pub const MIN_ENDING_LEN: usize = 2;

    /// Fallback ending length when the last word has no trailing vowel run.
    pub const FALLBACK_ENDING_LEN: usize = 3;

    /// Number of leading labels taken as the expected repeating unit.
    pub const EXPECTED_PATTERN_LEN: usize = 4;

    /// Default repeating unit when no observed labels are available.
    pub const DEFAULT_PATTERN: &[&str] = &["A", "B", "A", "B"];
}
