//! Parsing module for chord-bearing song text
//!
//! This module holds the chord grammar shared by line classification,
//! chord extraction and transposition.

pub mod chord_grammar;

// Re-export commonly used types
pub use chord_grammar::{is_chord_word, scan_chords, ChordMatch};
