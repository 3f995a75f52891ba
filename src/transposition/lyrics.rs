//! Whole-song transposition
//!
//! Lyrics are stored as one string with chord lines above lyric lines.
//! Only chord lines are rewritten; every other line, blank lines and
//! trailing newlines included, comes back exactly as it went in.

use crate::structure::line_analysis::is_chord_line;
use crate::transposition::chord_transpose::transpose_chord;
use crate::transposition::semitones::semitone_difference;

/// Transpose every chord line of `lyrics` by `semitones`.
///
/// A shift of 0 returns the input untouched, so flat spellings survive.
pub fn transpose_lyrics(lyrics: &str, semitones: i32) -> String {
    if semitones == 0 {
        return lyrics.to_string();
    }

    lyrics
        .split('\n')
        .map(|line| {
            if is_chord_line(line) {
                transpose_chord(line, semitones)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transpose lyrics written in `from_key` so they read in `to_key`
pub fn transpose_to_key(lyrics: &str, from_key: &str, to_key: &str) -> String {
    let semitones = semitone_difference(from_key, to_key);
    transpose_lyrics(lyrics, semitones as i32)
}

/// Clean up text pasted into the song editor.
///
/// Chords are expected on their own lines; detection happens at display
/// time, so only the surrounding whitespace is removed here.
pub fn parse_pasted_lyrics(text: &str) -> String {
    text.trim().to_string()
}
