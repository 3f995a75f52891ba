//! Chord grammar
//!
//! One root letter A-G, an optional accidental (`#` or `b`), an optional
//! quality marker (m, maj, min, dim, aug, sus, add) and optional digits.
//!
//! Two entry points share the grammar:
//! - [`is_chord_word`]: does a whole whitespace-delimited word match?
//! - [`scan_chords`]: leftmost, non-overlapping matches inside a line.
//!
//! A match inside a line must sit on word boundaries, where word characters
//! are ASCII letters, digits and `_`. The character before it may not be a
//! word character, and the character after it may be
//! neither a word character nor `#`. The second rule keeps `C#` from being
//! read as `C` followed by a stray sharp.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::chord::ChordParts;

/// Whole-word form of the grammar
static CHORD_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-G][b#]?(?:m|maj|min|dim|aug|sus|add)?[0-9]*$")
        .expect("chord word pattern is valid")
});

/// Unanchored form used for scanning. Longer quality markers come first so
/// "maj" wins over "m" at the same position.
static CHORD_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-G][b#]?)(maj|min|dim|aug|sus|add|m)?([0-9]*)")
        .expect("chord scan pattern is valid")
});

/// A chord found in a line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChordMatch<'a> {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    pub parts: ChordParts<'a>,
}

impl<'a> ChordMatch<'a> {
    /// The matched text as written in the line
    pub fn text<'l>(&self, line: &'l str) -> &'l str {
        &line[self.start..self.end]
    }
}

/// Check whether a single word is a chord symbol
pub fn is_chord_word(word: &str) -> bool {
    CHORD_WORD.is_match(word)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn starts_on_boundary(line: &str, start: usize) -> bool {
    line[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c))
}

fn ends_on_boundary(line: &str, end: usize) -> bool {
    line[end..]
        .chars()
        .next()
        .map_or(true, |c| !is_word_char(c) && c != '#')
}

/// Scan a line for chord symbols, left to right, without overlap
pub fn scan_chords(line: &str) -> impl Iterator<Item = ChordMatch<'_>> + '_ {
    CHORD_SCAN.captures_iter(line).filter_map(move |caps| {
        let whole = caps.get(0)?;
        if !starts_on_boundary(line, whole.start()) || !ends_on_boundary(line, whole.end()) {
            return None;
        }

        Some(ChordMatch {
            start: whole.start(),
            end: whole.end(),
            parts: ChordParts {
                root: caps.get(1).map_or("", |m| m.as_str()),
                quality: caps.get(2).map_or("", |m| m.as_str()),
                number: caps.get(3).map_or("", |m| m.as_str()),
            },
        })
    })
}
