pub mod chord_transpose;
pub mod lyrics;
pub mod semitones;

pub use crate::models::key::normalize_note;
pub use chord_transpose::transpose_chord;
pub use lyrics::{parse_pasted_lyrics, transpose_lyrics, transpose_to_key};
pub use semitones::{all_keys, effective_key, semitone_difference, step_key, try_semitone_difference};
