//! Thematic coherence and lexical statistics.
//!
//! Thematic coherence is the mean pairwise Jaccard overlap of each
//! section's significant-word set: lowercase, letters-only tokens longer
//! than three characters that are not function words.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::words::{MIN_SIGNIFICANT_LEN, STOPWORDS};
use crate::types::SectionLyrics;

/// Regex stripping everything but letters and whitespace.
#[allow(clippy::expect_used)]
static RE_NON_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z\s]").expect("valid regex: RE_NON_LETTER")
});

/// Stopword list as a set for O(1) membership checks.
static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Extract the significant words of a piece of text, in order.
///
/// Tokens are lowercased, stripped to letters, and kept only when longer
/// than three characters and not in the fixed stopword list.
#[must_use]
pub fn significant_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let cleaned = RE_NON_LETTER.replace_all(&lower, "");

    cleaned
        .split_whitespace()
        .filter(|word| word.len() >= MIN_SIGNIFICANT_LEN && !STOPWORD_SET.contains(word))
        .map(ToString::to_string)
        .collect()
}

/// The significant-word set of a whole section.
#[must_use]
pub fn section_word_set(section: &SectionLyrics) -> HashSet<String> {
    section
        .lines
        .iter()
        .flat_map(|line| significant_words(&line.text))
        .collect()
}

/// Jaccard overlap of two word sets: `|intersection| / |union|`, or 0 when
/// the union is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn set_overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();

    if union == 0 {
        return 0.0;
    }

    let intersection = a.intersection(b).count();

    intersection as f64 / union as f64
}

/// Score how much the sections of a song share vocabulary.
///
/// The score is the arithmetic mean of [`set_overlap`] over every unordered
/// pair of distinct sections. No sections scores 0.0; a single section has
/// no pairs and is vacuously coherent (1.0).
#[must_use]
pub fn score_thematic_coherence(sections: &[SectionLyrics]) -> f64 {
    if sections.is_empty() {
        return 0.0;
    }

    let word_sets: Vec<HashSet<String>> = sections.iter().map(section_word_set).collect();

    let mut overlap_sum = 0.0;
    let mut comparisons = 0u32;

    for (i, set_a) in word_sets.iter().enumerate() {
        for set_b in &word_sets[i + 1..] {
            overlap_sum += set_overlap(set_a, set_b);
            comparisons += 1;
        }
    }

    if comparisons == 0 {
        return 1.0;
    }

    overlap_sum / f64::from(comparisons)
}

/// Count the distinct lowercase, letters-only tokens across lines.
#[must_use]
pub fn unique_word_count(lines: &[&str]) -> usize {
    let mut words = HashSet::new();

    for line in lines {
        let lower = line.to_lowercase();
        let cleaned = RE_NON_LETTER.replace_all(&lower, "");
        for word in cleaned.split_whitespace() {
            words.insert(word.to_string());
        }
    }

    words.len()
}

/// Mean length of letters-only tokens across lines; 0 when there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_word_length(lines: &[&str]) -> f64 {
    let mut total_length = 0usize;
    let mut word_count = 0usize;

    for line in lines {
        let lower = line.to_lowercase();
        let cleaned = RE_NON_LETTER.replace_all(&lower, "");
        for word in cleaned.split_whitespace() {
            total_length += word.len();
            word_count += 1;
        }
    }

    if word_count == 0 {
        return 0.0;
    }

    total_length as f64 / word_count as f64
}
