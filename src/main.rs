//! `versecraft` - analyze a lyrics file from the command line.
//!
//! Usage: versecraft <lyrics.txt> [--json]

use std::path::Path;
use std::process::ExitCode;

use versecraft::config::{Config, OutputFormat};
use versecraft::error::{Error, Result};
use versecraft::song::{self, SongAnalysis};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut json_flag = false;
    let mut path_arg: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_flag = true,
            "--help" | "-h" => {
                println!("Usage: versecraft <lyrics.txt> [--json]");
                return Ok(());
            }
            _ => path_arg = Some(arg),
        }
    }

    let Some(path) = path_arg else {
        return Err(Error::from("Usage: versecraft <lyrics.txt> [--json]"));
    };

    let config = Config::load()?;
    let format = if json_flag {
        OutputFormat::Json
    } else {
        config.output_format
    };

    let sections = song::load_from_path(Path::new(&path))?;
    let analysis = song::analyze(&sections);

    match format {
        OutputFormat::Json => {
            let report = serde_json::to_string_pretty(&analysis)
                .map_err(|e| Error::Msg(format!("Failed to serialize report: {e}")))?;
            println!("{report}");
        }
        OutputFormat::Text => print_summary(&analysis),
    }

    Ok(())
}

/// Print a human-readable per-section summary.
fn print_summary(analysis: &SongAnalysis) {
    for section in &analysis.sections {
        println!(
            "--- {} ({}) ---",
            section.name,
            section.section_type.name()
        );
        println!("  rhyme scheme:       {}", section.rhyme_scheme.name());
        println!("  rhyme density:      {:.2}", section.rhyme_density);
        println!("  scheme consistency: {:.2}", section.scheme_consistency);
        println!(
            "  voice:              {:?} / {:?} / {:?}",
            section.perspective, section.verb_tense, section.emotional_tone
        );
        for line in &section.lines {
            println!(
                "  {:>3}. [{} syl] {}",
                line.line_number, line.syllable_count, line.text
            );
        }
        println!();
    }

    println!("thematic coherence: {:.3}", analysis.thematic_coherence);
    println!("unique words:       {}", analysis.unique_words);
    println!("avg word length:    {:.2}", analysis.avg_word_length);
}
