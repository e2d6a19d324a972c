//! Core data model for lyric analysis.
//!
//! All entities here are ephemeral: the caller builds them immediately before
//! an analysis call and discards them afterwards. The engine holds no state.

use serde::{Deserialize, Serialize};

/// The structural role of a song section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    /// Instrumental or sung introduction.
    Intro,
    /// Narrative verse.
    #[default]
    Verse,
    /// Build-up section before a chorus.
    PreChorus,
    /// Repeated central section.
    Chorus,
    /// Contrasting section, usually appearing once.
    Bridge,
    /// Closing section.
    Outro,
    /// Instrumental break between sections.
    Interlude,
    /// Stripped-down rhythmic section.
    Breakdown,
    /// Short catchy phrase section.
    Hook,
    /// Repeated line or couplet at the end of verses.
    Refrain,
}

impl SectionType {
    /// Returns all section type variants in conventional song order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Intro,
            Self::Verse,
            Self::PreChorus,
            Self::Chorus,
            Self::Bridge,
            Self::Outro,
            Self::Interlude,
            Self::Breakdown,
            Self::Hook,
            Self::Refrain,
        ]
    }

    /// Returns the human-readable name of this section type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intro => "Intro",
            Self::Verse => "Verse",
            Self::PreChorus => "Pre-Chorus",
            Self::Chorus => "Chorus",
            Self::Bridge => "Bridge",
            Self::Outro => "Outro",
            Self::Interlude => "Interlude",
            Self::Breakdown => "Breakdown",
            Self::Hook => "Hook",
            Self::Refrain => "Refrain",
        }
    }

    /// Classify a section header label (e.g. `"Verse 2"`, `"Pre-Chorus"`).
    ///
    /// Matching is case-insensitive substring search; unknown labels default
    /// to [`Self::Verse`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        // Pre-chorus must be checked before chorus.
        if lower.contains("pre-chorus") || lower.contains("prechorus") {
            Self::PreChorus
        } else if lower.contains("chorus") {
            Self::Chorus
        } else if lower.contains("intro") {
            Self::Intro
        } else if lower.contains("bridge") {
            Self::Bridge
        } else if lower.contains("outro") {
            Self::Outro
        } else if lower.contains("interlude") {
            Self::Interlude
        } else if lower.contains("breakdown") {
            Self::Breakdown
        } else if lower.contains("hook") {
            Self::Hook
        } else if lower.contains("refrain") {
            Self::Refrain
        } else {
            Self::Verse
        }
    }
}

/// A recognized end-rhyme scheme for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RhymeScheme {
    /// Paired couplets.
    Aabb,
    /// Alternating rhyme.
    Abab,
    /// Ballad stanza (second and fourth lines rhyme).
    Abcb,
    /// Monorhyme.
    Aaaa,
    /// Enclosed rhyme.
    Abba,
    /// Alternating quatrain closed by a couplet.
    Ababcc,
    /// Couplet-and-tail sestet.
    Aabccb,
    /// No recognized repeating scheme.
    #[default]
    Free,
    /// Too few lines to carry a scheme.
    None,
}

impl RhymeScheme {
    /// Returns the conventional letter notation for this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aabb => "AABB",
            Self::Abab => "ABAB",
            Self::Abcb => "ABCB",
            Self::Aaaa => "AAAA",
            Self::Abba => "ABBA",
            Self::Ababcc => "ABABCC",
            Self::Aabccb => "AABCCB",
            Self::Free => "free",
            Self::None => "none",
        }
    }
}

/// The dominant narrative point of view across a set of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrativePerspective {
    /// "I"/"we" voice.
    FirstPerson,
    /// Addressed to "you".
    SecondPerson,
    /// Neither voice dominates.
    ThirdPerson,
}

/// The dominant verb tense across a set of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbTense {
    /// Past-tense indicators dominate.
    Past,
    /// Present-tense indicators dominate.
    Present,
    /// Future-tense indicators dominate.
    Future,
    /// No clear dominant tense.
    Mixed,
}

/// Coarse emotional register detected from keyword hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    /// Bright, celebratory language.
    Joyful,
    /// Sad or mournful language.
    Melancholic,
    /// Hostile or aggressive language.
    Angry,
    /// Calm, settled language.
    Peaceful,
    /// Worried, fearful language.
    Anxious,
    /// Forward-looking, optimistic language.
    Hopeful,
    /// Backward-looking, wistful language.
    Nostalgic,
    /// Love-centered language.
    Romantic,
    /// Resistant, rebellious language.
    Defiant,
    /// Mixed sweet-and-sad language.
    Bittersweet,
    /// Victorious language.
    Triumphant,
    /// Reflective, inward language (the default).
    Introspective,
    /// High-motion, high-energy language.
    Energetic,
    /// Heavy, solemn language.
    Somber,
    /// Light, teasing language.
    Playful,
}

/// One syllable's position and stress within a line.
///
/// `syllable_index` runs across the whole line, continuing over word
/// boundaries rather than resetting per word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableStress {
    /// 0-based position within the line's full stress sequence.
    pub syllable_index: usize,
    /// Whether the heuristic judges this syllable stressed.
    pub is_stressed: bool,
    /// The substring judged to be this syllable.
    pub syllable_text: String,
}

/// One physical line of lyrics as supplied by the caller.
///
/// `rhyme_scheme_position` is a caller-assigned rhyme-group label (e.g.
/// `"A"`, `"B"`). The engine never assigns these labels itself; it only
/// scores their consistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Caller-assigned identity, unique within a single analysis call.
    pub line_number: usize,
    /// Raw line text; may contain punctuation and mixed case.
    pub text: String,
    /// Caller-assigned rhyme-group label, empty if unassigned.
    #[serde(default)]
    pub rhyme_scheme_position: String,
}

impl LyricLine {
    /// Create a line with no rhyme-group label.
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
            rhyme_scheme_position: String::new(),
        }
    }

    /// Attach a caller-assigned rhyme-group label.
    #[must_use]
    pub fn with_scheme_position(mut self, label: impl Into<String>) -> Self {
        self.rhyme_scheme_position = label.into();
        self
    }
}

/// A named block of lyric lines in top-to-bottom reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLyrics {
    /// Display name, e.g. `"Verse 1"`.
    pub name: String,
    /// Structural role of the section.
    pub section_type: SectionType,
    /// Ordered lyric lines.
    pub lines: Vec<LyricLine>,
}

impl SectionLyrics {
    /// Create an empty section.
    pub fn new(name: impl Into<String>, section_type: SectionType) -> Self {
        Self {
            name: name.into(),
            section_type,
            lines: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn section_type_from_label() {
        assert_eq!(SectionType::from_label("Verse 1"), SectionType::Verse);
        assert_eq!(SectionType::from_label("CHORUS"), SectionType::Chorus);
        assert_eq!(SectionType::from_label("Pre-Chorus"), SectionType::PreChorus);
        assert_eq!(SectionType::from_label("Bridge"), SectionType::Bridge);
        assert_eq!(SectionType::from_label("Something Odd"), SectionType::Verse);
    }

    #[test]
    fn scheme_names_round_trip() {
        assert_eq!(RhymeScheme::Abab.name(), "ABAB");
        assert_eq!(RhymeScheme::Free.name(), "free");
    }

    #[test]
    fn lyric_line_builder() {
        let line = LyricLine::new(3, "Under the pale moonlight").with_scheme_position("A");
        assert_eq!(line.line_number, 3);
        assert_eq!(line.rhyme_scheme_position, "A");
    }
}
