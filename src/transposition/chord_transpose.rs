/// Chord-by-chord transposition
///
/// Every chord the grammar finds in the input is shifted by a fixed number
/// of semitones; everything between chords is copied through byte for byte.
/// Roots that do not name a pitch class (Cb, Fb, E#, B#) are left as written.

use crate::parse::chord_grammar::scan_chords;

/// Transpose every chord symbol in `text` by `semitones` (any sign).
///
/// Results always use sharp spellings: `transpose_chord("Bb", 2)` is "C",
/// `transpose_chord("Bb", 12)` is "A#".
pub fn transpose_chord(text: &str, semitones: i32) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for found in scan_chords(text) {
        out.push_str(&text[last..found.start]);

        match found.parts.root_key() {
            Some(root) => out.push_str(&found.parts.with_root(root.transpose(semitones))),
            None => out.push_str(found.text(text)),
        }

        last = found.end;
    }

    out.push_str(&text[last..]);
    out
}
