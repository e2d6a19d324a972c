//! Syllable counting and word syllabification.
//!
//! Both operations treat a maximal run of vowel characters (`a e i o u y`)
//! as one phonetic nucleus. This matches written English well enough for
//! prosody scoring but is not a pronunciation model.

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching one maximal vowel run.
#[allow(clippy::expect_used)]
static RE_VOWEL_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[aeiouy]+").expect("valid regex: RE_VOWEL_GROUPS")
});

/// Whether a character counts as a vowel for syllabification.
pub(crate) const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Count syllables in a line of text.
///
/// The count is the number of maximal vowel runs in the lowercased, trimmed
/// text, minus one when the text ends in a silent-looking `e` (and the count
/// would otherwise exceed one). Non-empty input always counts at least one
/// syllable; empty or whitespace-only input counts zero.
#[must_use]
pub fn count_syllables(text: &str) -> usize {
    let cleaned = text.trim().to_lowercase();

    if cleaned.is_empty() {
        return 0;
    }

    let mut count = RE_VOWEL_GROUPS.find_iter(&cleaned).count();

    // Silent-e heuristic: "like" reads as one syllable, not two.
    if cleaned.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Split a single word into syllable substrings.
///
/// The word is lowercased and stripped to `a-z` first. Each syllable is the
/// consonants preceding a vowel run, the run itself, and the consonants
/// following it up to the next vowel run; any trailing leftovers join the
/// last syllable. Concatenating the result always reproduces the cleaned
/// word exactly.
///
/// A word with no vowel runs comes back whole as a single syllable; a word
/// with no letters at all comes back as an empty sequence.
#[must_use]
pub fn split_into_syllables(word: &str) -> Vec<String> {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();

    if cleaned.is_empty() {
        return Vec::new();
    }

    let run_starts: Vec<usize> = RE_VOWEL_GROUPS
        .find_iter(&cleaned)
        .map(|m| m.start())
        .collect();

    if run_starts.is_empty() {
        return vec![cleaned];
    }

    // A syllable runs from the current cursor (leading consonants) through
    // its vowel run and the consonants after it, stopping where the next
    // vowel run begins. The last syllable absorbs everything to the end of
    // the word, so no characters are ever dropped.
    let boundaries = run_starts
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(cleaned.len()));

    let mut syllables = Vec::with_capacity(run_starts.len());
    let mut cursor = 0;

    for next_start in boundaries {
        syllables.push(cleaned[cursor..next_start].to_string());
        cursor = next_start;
    }

    syllables
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn empty_text_counts_zero() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("   "), 0);
    }

    #[test]
    fn single_vowel_counts_one() {
        assert_eq!(count_syllables("a"), 1);
    }

    #[test]
    fn silent_e_reduces_count() {
        // "like" has two vowel runs but reads as one syllable.
        assert_eq!(count_syllables("like"), 1);
    }

    #[test]
    fn open_counts_two() {
        assert_eq!(count_syllables("open"), 2);
    }

    #[test]
    fn non_empty_always_at_least_one() {
        for text in ["tsk", "x", "rhythm", "Hello, world!", "e"] {
            assert!(count_syllables(text) >= 1, "failed for {text:?}");
        }
    }

    #[test]
    fn whole_line_counts_across_words() {
        // Seven vowel runs; the silent-e rule only looks at the end of the
        // whole line, so "pale" keeps both of its runs here.
        assert_eq!(count_syllables("Under the pale moonlight"), 7);
    }

    #[test]
    fn split_empty_word() {
        assert_eq!(split_into_syllables(""), Vec::<String>::new());
        assert_eq!(split_into_syllables("!?'"), Vec::<String>::new());
    }

    #[test]
    fn split_no_vowels_returns_whole_word() {
        assert_eq!(split_into_syllables("tsk"), vec!["tsk"]);
    }

    #[test]
    fn split_basic_words() {
        assert_eq!(split_into_syllables("open"), vec!["op", "en"]);
        assert_eq!(split_into_syllables("banana"), vec!["ban", "an", "a"]);
        assert_eq!(split_into_syllables("Moonlight,"), vec!["moonl", "ight"]);
    }

    #[test]
    fn split_concat_reproduces_cleaned_word() {
        for word in ["tonight", "strength", "Dancing!", "alone", "rhythm", "moonlight"] {
            let cleaned: String = word
                .to_lowercase()
                .chars()
                .filter(char::is_ascii_lowercase)
                .collect();
            let joined = split_into_syllables(word).concat();
            assert_eq!(joined, cleaned, "failed for {word:?}");
        }
    }
}
