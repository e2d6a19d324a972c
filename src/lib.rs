//! `versecraft` - heuristic lyric prosody and structural-coherence analyzer.
//!
//! Given song lyrics split into labeled sections, this crate computes
//! syllable counts, stress patterns, rhyme-scheme consistency, cross-line
//! rhyme matches, and thematic coherence, using only lexical and
//! orthographic heuristics over the written text. There is no machine
//! learning and no pronunciation dictionary; the approximations are part
//! of the contract.

pub mod config;
pub mod constants;
pub mod error;
pub mod prosody;
pub mod song;
pub mod types;
