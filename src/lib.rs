//! Chord Sheet WASM Module
//!
//! Transposition engine for worship song libraries. Detects chord lines in
//! pasted song text, locates each chord, and shifts chords between keys while
//! leaving lyric lines and spacing untouched.
//!
//! Everything here is a pure function of its arguments; the module keeps no
//! state between calls.

pub mod models;
pub mod parse;
pub mod structure;
pub mod transposition;
pub mod api;

// Re-export commonly used types
pub use models::{ChordPosition, Key, KeyError, ALL_KEYS};
pub use structure::{
    is_chord_line, is_chord_line_with, layout_song, layout_song_with, parse_chord_line,
    ClassifierConfig, SheetLine, SongSheet,
};
pub use transposition::{
    all_keys, effective_key, normalize_note, parse_pasted_lyrics, semitone_difference, step_key,
    transpose_chord, transpose_lyrics, transpose_to_key, try_semitone_difference,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init (e.g. hot reload) fails harmlessly
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Chord sheet WASM module initialized");
}
