//! Song text structure
//!
//! Derives structure from raw song text on demand: which lines carry
//! chords, where each chord sits, and how a whole song lays out in a given
//! key. Stateless; nothing here is stored.
//!
//! ## Modules
//!
//! - `line_analysis`: chord-line detection and chord extraction
//! - `song_sheet`: per-line layout of a song transposed to a display key

pub mod line_analysis;
pub mod song_sheet;

// Re-exports for convenience
pub use line_analysis::{
    is_chord_line, is_chord_line_with, parse_chord_line, ClassifierConfig,
    DEFAULT_CHORD_RATIO_THRESHOLD,
};
pub use song_sheet::{layout_song, layout_song_with, SheetLine, SongSheet};
