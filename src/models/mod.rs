//! Models module for the chord transposition engine
//!
//! Transient values only: keys, chord tokens and their positions. Nothing
//! here outlives the call that built it.

pub mod chord;
pub mod key;

// Re-export commonly used types
pub use chord::{ChordParts, ChordPosition};
pub use key::{normalize_note, Key, KeyError, ALL_KEYS, SEMITONES_PER_OCTAVE};
