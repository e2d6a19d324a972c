//! Narrative voice heuristics: perspective, tense, and emotional tone.
//!
//! All three detectors work on indicator-word counts over the joined,
//! lowercased line text. They pick a plausible dominant register, nothing
//! more; a line like "you and I" will simply go to whichever list counts
//! higher.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{EmotionalTone, NarrativePerspective, VerbTense};

/// First-person pronouns, word-bounded.
#[allow(clippy::expect_used)]
static RE_FIRST_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:i|me|my|mine|we|us|our)\b").expect("valid regex: RE_FIRST_PERSON")
});

/// Second-person pronouns, word-bounded.
#[allow(clippy::expect_used)]
static RE_SECOND_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:you|your|yours)\b").expect("valid regex: RE_SECOND_PERSON")
});

/// Past-tense indicator words.
#[allow(clippy::expect_used)]
static RE_PAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:was|were|had|did|been)\b").expect("valid regex: RE_PAST")
});

/// Present-tense indicator words.
#[allow(clippy::expect_used)]
static RE_PRESENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:is|are|am|do|does)\b").expect("valid regex: RE_PRESENT")
});

/// Future-tense indicator words and phrases.
#[allow(clippy::expect_used)]
static RE_FUTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:will|shall|going to)\b").expect("valid regex: RE_FUTURE")
});

/// Keyword lists per tone, in priority order for ties.
const TONE_KEYWORDS: &[(EmotionalTone, &[&str])] = &[
    (EmotionalTone::Joyful, &["happy", "joy", "smile", "laugh", "bright", "sun"]),
    (EmotionalTone::Melancholic, &["sad", "tears", "cry", "pain", "lonely", "dark"]),
    (EmotionalTone::Angry, &["mad", "hate", "fury", "rage", "fight"]),
    (EmotionalTone::Peaceful, &["calm", "peace", "quiet", "still", "gentle"]),
    (EmotionalTone::Anxious, &["worry", "fear", "scared", "nervous", "afraid"]),
    (EmotionalTone::Hopeful, &["hope", "dream", "wish", "believe", "tomorrow"]),
    (EmotionalTone::Nostalgic, &["remember", "past", "memory", "used to", "once"]),
    (EmotionalTone::Romantic, &["love", "heart", "kiss", "forever", "together"]),
    (EmotionalTone::Defiant, &["never", "fight", "stand", "rebel", "break"]),
    (EmotionalTone::Bittersweet, &["sweet", "bitter", "both", "mixed"]),
    (EmotionalTone::Triumphant, &["win", "victory", "champion", "rise", "conquer"]),
    (EmotionalTone::Introspective, &["think", "wonder", "question", "soul", "mind"]),
    (EmotionalTone::Energetic, &["run", "fast", "energy", "power", "move"]),
    (EmotionalTone::Somber, &["grey", "heavy", "weight", "burden", "solemn"]),
    (EmotionalTone::Playful, &["play", "fun", "game", "tease", "silly"]),
];

/// Join lines into one lowercased haystack.
fn joined(lines: &[&str]) -> String {
    lines.join(" ").to_lowercase()
}

/// Detect the dominant narrative point of view.
///
/// First person wins when its pronouns strictly outnumber second-person
/// ones; any second-person presence otherwise wins; third person is the
/// fallback.
#[must_use]
pub fn detect_narrative_perspective(lines: &[&str]) -> NarrativePerspective {
    let text = joined(lines);

    let first_person = RE_FIRST_PERSON.find_iter(&text).count();
    let second_person = RE_SECOND_PERSON.find_iter(&text).count();

    if first_person > second_person {
        NarrativePerspective::FirstPerson
    } else if second_person > 0 {
        NarrativePerspective::SecondPerson
    } else {
        NarrativePerspective::ThirdPerson
    }
}

/// Detect the dominant verb tense from indicator-word counts.
///
/// Past or future must strictly dominate both rivals to win; otherwise any
/// present-tense indicator means present, and a quiet text is mixed.
#[must_use]
pub fn detect_verb_tense(lines: &[&str]) -> VerbTense {
    let text = joined(lines);

    let past = RE_PAST.find_iter(&text).count();
    let present = RE_PRESENT.find_iter(&text).count();
    let future = RE_FUTURE.find_iter(&text).count();

    if past > present && past > future {
        VerbTense::Past
    } else if future > present && future > past {
        VerbTense::Future
    } else if present > 0 {
        VerbTense::Present
    } else {
        VerbTense::Mixed
    }
}

/// Detect the emotional register with the most keyword hits.
///
/// Each keyword scores one point if it appears anywhere in the text
/// (substring match, so "sunlight" counts for "sun"). The first tone with
/// the strictly highest score wins; with no hits at all the text is read
/// as introspective.
#[must_use]
pub fn detect_emotional_tone(lines: &[&str]) -> EmotionalTone {
    let text = joined(lines);

    let mut best_score = 0;
    let mut detected = EmotionalTone::Introspective;

    for (tone, keywords) in TONE_KEYWORDS {
        let score = keywords
            .iter()
            .filter(|keyword| text.contains(**keyword))
            .count();

        if score > best_score {
            best_score = score;
            detected = *tone;
        }
    }

    detected
}
