//! Rhyme-ending extraction, matching, and scheme scoring.
//!
//! A "rhyme ending" is the trailing substring of a line's last word starting
//! at its last vowel run. Matching compares trailing substrings first and
//! falls back to vowel-skeleton equality for near rhymes. All comparisons
//! are orthographic; homophones spelled differently will not match.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::rhyme::{
    DEFAULT_PATTERN, EXPECTED_PATTERN_LEN, FALLBACK_ENDING_LEN, MIN_ENDING_LEN,
};
use crate::prosody::syllable::is_vowel;
use crate::types::{LyricLine, RhymeScheme};

/// Regex matching a trailing vowel-led run at the end of a word.
#[allow(clippy::expect_used)]
static RE_ENDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[aeiouy][a-z]*$").expect("valid regex: RE_ENDING")
});

/// Extract the comparable rhyme key from a line.
///
/// The key is taken from the last whitespace-delimited token of the
/// lowercased, trimmed line: the match of `[aeiouy][a-z]*$` if there is
/// one, otherwise the token's last three characters (or the whole token
/// when shorter). An empty line degenerates to an empty key, which the
/// matcher then rejects as too short.
#[must_use]
pub fn extract_rhyme_ending(text: &str) -> String {
    let cleaned = text.trim().to_lowercase();
    let last_word = cleaned.split_whitespace().last().unwrap_or("");

    if let Some(m) = RE_ENDING.find(last_word) {
        return m.as_str().to_string();
    }

    let len = last_word.chars().count();
    last_word
        .chars()
        .skip(len.saturating_sub(FALLBACK_ENDING_LEN))
        .collect()
}

/// Test whether two rhyme endings count as a rhyme.
///
/// Endings shorter than two characters never rhyme. Otherwise the trailing
/// `min(len)` characters are compared for exact equality, and failing that,
/// their vowel skeletons (all vowels in order) are compared — equal,
/// non-empty skeletons count as a near rhyme even when consonants differ.
#[must_use]
pub fn endings_rhyme(ending_a: &str, ending_b: &str) -> bool {
    let len_a = ending_a.chars().count();
    let len_b = ending_b.chars().count();

    if len_a < MIN_ENDING_LEN || len_b < MIN_ENDING_LEN {
        return false;
    }

    let min_len = len_a.min(len_b);
    let suffix_a: String = ending_a.chars().skip(len_a - min_len).collect();
    let suffix_b: String = ending_b.chars().skip(len_b - min_len).collect();

    if suffix_a == suffix_b {
        return true;
    }

    let vowels_a: String = suffix_a.chars().filter(|c| is_vowel(*c)).collect();
    let vowels_b: String = suffix_b.chars().filter(|c| is_vowel(*c)).collect();

    !vowels_a.is_empty() && vowels_a == vowels_b
}

/// Find every candidate line that rhymes with the target.
///
/// Returns line numbers in candidate order. A line is never matched against
/// itself, keyed by `line_number`, even if the candidate list contains the
/// target.
#[must_use]
pub fn find_rhyming_lines(target: &LyricLine, candidates: &[LyricLine]) -> Vec<usize> {
    let target_ending = extract_rhyme_ending(&target.text);

    candidates
        .iter()
        .filter(|line| line.line_number != target.line_number)
        .filter(|line| endings_rhyme(&target_ending, &extract_rhyme_ending(&line.text)))
        .map(|line| line.line_number)
        .collect()
}

/// Score how consistently the caller-assigned rhyme-group labels follow a
/// repeating pattern.
///
/// The expected pattern is the first four observed labels, repeating; with
/// no observed labels the default `A B A B` unit applies. The score is the
/// fraction of positions whose label matches the expected one, so it lands
/// in `[0, 1]`. Fewer than two lines are vacuously consistent (1.0).
///
/// Labels are trusted as given; whether same-labeled lines actually rhyme
/// is [`find_rhyming_lines`]'s concern.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score_rhyme_scheme_consistency(lines: &[LyricLine]) -> f64 {
    if lines.len() < 2 {
        return 1.0;
    }

    let positions: Vec<&str> = lines
        .iter()
        .map(|line| line.rhyme_scheme_position.as_str())
        .collect();

    let expected = expected_pattern(&positions);

    let matches = positions
        .iter()
        .enumerate()
        .filter(|&(i, position)| *position == expected[i % expected.len()])
        .count();

    matches as f64 / positions.len() as f64
}

/// The repeating unit the observed labels are scored against.
fn expected_pattern<'a>(positions: &[&'a str]) -> Vec<&'a str> {
    let head: Vec<&str> = positions
        .iter()
        .take(EXPECTED_PATTERN_LEN)
        .copied()
        .collect();

    if head.is_empty() {
        DEFAULT_PATTERN.to_vec()
    } else {
        head
    }
}

/// Assign rhyme-pattern letters to a sequence of endings.
///
/// Distinct endings get `A`, `B`, `C`, … in first-seen order; repeated
/// endings reuse their letter. The result is the concatenated pattern,
/// e.g. `"ABAB"`. A section with more than 26 distinct endings keeps
/// issuing higher code points past `Z`; the pattern stays well-formed
/// (one unique character per rhyme group) even then.
#[must_use]
pub fn build_rhyme_pattern(endings: &[String]) -> String {
    let mut letters: HashMap<&str, char> = HashMap::new();
    let mut next = u32::from(b'A');
    let mut pattern = String::with_capacity(endings.len());

    for ending in endings {
        let letter = *letters.entry(ending.as_str()).or_insert_with(|| {
            let assigned = char::from_u32(next).unwrap_or(char::REPLACEMENT_CHARACTER);
            next += 1;
            assigned
        });
        pattern.push(letter);
    }

    pattern
}

/// Classify a letter pattern into a named rhyme scheme.
///
/// Recognizes the common closed forms; anything unrecognized is
/// [`RhymeScheme::Free`], and fewer than two lines cannot carry a scheme.
#[must_use]
pub fn classify_rhyme_scheme(pattern: &str, line_count: usize) -> RhymeScheme {
    if line_count < 2 {
        return RhymeScheme::None;
    }

    match pattern {
        "AABB" => RhymeScheme::Aabb,
        "ABAB" => RhymeScheme::Abab,
        "ABCB" => RhymeScheme::Abcb,
        "AAAA" => RhymeScheme::Aaaa,
        "ABBA" => RhymeScheme::Abba,
        "ABABCC" => RhymeScheme::Ababcc,
        "AABCCB" => RhymeScheme::Aabccb,
        _ => RhymeScheme::Free,
    }
}

/// Derive and classify the rhyme scheme of a section's lines from their
/// extracted endings.
#[must_use]
pub fn analyze_rhyme_scheme(lines: &[LyricLine]) -> RhymeScheme {
    if lines.len() < 2 {
        return RhymeScheme::None;
    }

    let endings: Vec<String> = lines
        .iter()
        .map(|line| extract_rhyme_ending(&line.text))
        .collect();

    classify_rhyme_scheme(&build_rhyme_pattern(&endings), lines.len())
}
