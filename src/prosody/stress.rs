//! Stress-contour assignment for lyric lines.
//!
//! Produces a plausible, not phonetically verified, stress contour: English
//! multisyllabic words lean toward penultimate stress, and longer words fall
//! back to an alternating pattern.

use crate::prosody::syllable::split_into_syllables;
use crate::types::SyllableStress;

/// Decide whether syllable `index` of a word is stressed.
///
/// Rule order, first match wins:
/// 1. a one-syllable word is stressed;
/// 2. the penultimate syllable is stressed;
/// 3. otherwise stress alternates from the first syllable (even indices
///    stressed, odd unstressed).
#[must_use]
pub fn is_stressed(syllables: &[String], index: usize) -> bool {
    if syllables.len() == 1 {
        return true;
    }

    if index + 2 == syllables.len() {
        return true;
    }

    index % 2 == 0
}

/// Extract the full stress sequence for a line.
///
/// Words are taken in order, each syllabified and stress-assigned on its
/// own; `syllable_index` keeps incrementing across word boundaries. An
/// empty or whitespace-only line yields an empty sequence.
#[must_use]
pub fn extract_stress_pattern(text: &str) -> Vec<SyllableStress> {
    let mut stresses = Vec::new();
    let mut syllable_index = 0;

    for word in text.split_whitespace() {
        let syllables = split_into_syllables(word);

        for (i, syllable) in syllables.iter().enumerate() {
            stresses.push(SyllableStress {
                syllable_index,
                is_stressed: is_stressed(&syllables, i),
                syllable_text: syllable.clone(),
            });
            syllable_index += 1;
        }
    }

    stresses
}
