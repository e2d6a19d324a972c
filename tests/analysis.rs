//! End-to-end tests over the public analysis API.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::io::Write;

use versecraft::prosody::{
    count_syllables, endings_rhyme, find_rhyming_lines, score_rhyme_scheme_consistency,
    score_thematic_coherence, split_into_syllables,
};
use versecraft::song;
use versecraft::types::{LyricLine, RhymeScheme, SectionLyrics, SectionType};

const SONG: &str = "\
[Verse 1]
I walked alone tonight
Under the pale moonlight

[Chorus]
I walked alone tonight
Dancing in the moonlight
";

fn section(name: &str, lines: &[&str]) -> SectionLyrics {
    let mut section = SectionLyrics::new(name, SectionType::from_label(name));
    section.lines = lines
        .iter()
        .enumerate()
        .map(|(i, text)| LyricLine::new(i, *text))
        .collect();
    section
}

#[test]
fn syllable_fixtures() {
    assert_eq!(count_syllables(""), 0);
    assert_eq!(count_syllables("a"), 1);
    assert_eq!(count_syllables("like"), 1);
    assert_eq!(count_syllables("open"), 2);
}

#[test]
fn syllabifier_loses_no_characters() {
    for word in ["moonlight", "Dancing,", "tonight", "under"] {
        let cleaned: String = word
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_lowercase)
            .collect();
        assert_eq!(split_into_syllables(word).concat(), cleaned);
    }
}

#[test]
fn rhyme_fixtures() {
    assert!(endings_rhyme("ation", "nation"));
    assert!(!endings_rhyme("cat", "dog"));
    assert!(!endings_rhyme("a", "ab"));
}

#[test]
fn scheme_consistency_fixtures() {
    assert!((score_rhyme_scheme_consistency(&[]) - 1.0).abs() < f64::EPSILON);

    let abab: Vec<LyricLine> = ["A", "B", "A", "B"]
        .iter()
        .enumerate()
        .map(|(i, label)| LyricLine::new(i, "x").with_scheme_position(*label))
        .collect();
    assert!((score_rhyme_scheme_consistency(&abab) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn coherence_fixtures() {
    assert!(score_thematic_coherence(&[]).abs() < f64::EPSILON);

    let single = vec![section("Verse 1", &["golden morning sunshine"])];
    assert!((score_thematic_coherence(&single) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn moonlight_scenario_scores_strictly_between_zero_and_one() {
    let sections = song::parse_sections(SONG);
    let analysis = song::analyze(&sections);

    assert!(analysis.thematic_coherence > 0.0);
    assert!(analysis.thematic_coherence < 1.0);
}

#[test]
fn self_rhyme_is_excluded_even_with_duplicate_numbers() {
    let target = LyricLine::new(7, "a shining light");
    let candidates = vec![
        LyricLine::new(7, "a shining light"),
        LyricLine::new(8, "burning bright"),
    ];
    let rhyming = find_rhyming_lines(&target, &candidates);
    assert_eq!(rhyming, vec![8]);
}

#[test]
fn full_report_structure() {
    let sections = song::parse_sections(SONG);
    let analysis = song::analyze(&sections);

    assert_eq!(analysis.sections.len(), 2);
    assert_eq!(analysis.sections[1].section_type, SectionType::Chorus);

    for section_report in &analysis.sections {
        assert_ne!(section_report.rhyme_scheme, RhymeScheme::None);
        assert!((0.0..=1.0).contains(&section_report.rhyme_density));
        assert!((0.0..=1.0).contains(&section_report.scheme_consistency));
        for line in &section_report.lines {
            assert!(line.syllable_count >= 1);
            assert!(!line.stress_pattern.is_empty());
        }
    }
}

#[test]
fn load_from_path_round_trips_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(SONG.as_bytes()).expect("write lyrics");

    let sections = song::load_from_path(file.path()).expect("load lyrics");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].name, "Verse 1");
}

#[test]
fn load_from_path_rejects_empty_files() {
    let file = tempfile::NamedTempFile::new().expect("create temp file");
    let err = song::load_from_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("no lyric lines"));
}
