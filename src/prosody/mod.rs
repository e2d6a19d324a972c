//! Heuristic prosody analysis engine.
//!
//! Every operation here is a pure function over its arguments: no shared
//! mutable state, no I/O, no error paths. Empty or malformed input always
//! yields a defined default rather than a failure, so concurrent use from
//! any number of threads needs no locking discipline.
//!
//! The heuristics are deliberately orthographic, not phonetic: syllables
//! come from vowel-group scanning, stress from position rules, and rhymes
//! from trailing-substring comparison. None of this consults a
//! pronunciation dictionary, and downstream consumers depend on these
//! specific (if imperfect) approximations staying as they are.

pub mod rhyme;
pub mod stress;
pub mod syllable;
pub mod theme;
pub mod voice;

pub use rhyme::{
    analyze_rhyme_scheme, build_rhyme_pattern, classify_rhyme_scheme, endings_rhyme,
    extract_rhyme_ending, find_rhyming_lines, score_rhyme_scheme_consistency,
};
pub use stress::{extract_stress_pattern, is_stressed};
pub use syllable::{count_syllables, split_into_syllables};
pub use theme::{
    average_word_length, score_thematic_coherence, significant_words, unique_word_count,
};
pub use voice::{detect_emotional_tone, detect_narrative_perspective, detect_verb_tense};
