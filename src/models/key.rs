/// The twelve pitch classes a song or chord can be keyed in
///
/// Keys are always stored with their sharp spelling (C, C#, D, ... B).
/// Flat spellings (Db, Eb, Gb, Ab, Bb) are accepted on input and folded
/// to the sharp equivalent before any arithmetic happens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of pitch classes in the chromatic scale
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Canonical key names in chromatic order, C first
pub const ALL_KEYS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings and their sharp equivalents
const FLAT_TO_SHARP: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// Error returned by strict key parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Key name is empty")]
    Empty,

    #[error("Unrecognized key: '{0}'. Expected one of: C, C#, D, D#, E, F, F#, G, G#, A, A#, B (or Db, Eb, Gb, Ab, Bb)")]
    Unrecognized(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl Key {
    /// All keys in chromatic order starting at C
    pub const ALL: [Key; 12] = [
        Key::C, Key::Cs, Key::D, Key::Ds, Key::E, Key::F,
        Key::Fs, Key::G, Key::Gs, Key::A, Key::As, Key::B,
    ];

    /// Chromatic index (0 = C, 11 = B)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Key at a chromatic index; any integer wraps modulo 12
    pub fn from_index(index: i32) -> Key {
        Key::ALL[index.rem_euclid(SEMITONES_PER_OCTAVE) as usize]
    }

    /// Canonical (sharp) spelling
    pub fn as_str(self) -> &'static str {
        ALL_KEYS[self.index() as usize]
    }

    /// Look up a key by name, accepting sharp or flat spellings.
    ///
    /// Returns `None` for anything else. Case-sensitive, since the chord
    /// grammar only recognizes upper-case roots.
    pub fn lookup(name: &str) -> Option<Key> {
        let normalized = normalize_note(name);
        ALL_KEYS
            .iter()
            .position(|&k| k == normalized)
            .map(|i| Key::ALL[i])
    }

    /// Move around the chromatic circle by `semitones` (any sign)
    pub fn transpose(self, semitones: i32) -> Key {
        Key::from_index(self.index() as i32 + semitones.rem_euclid(SEMITONES_PER_OCTAVE))
    }

    /// Clockwise distance from `self` up to `target`, always in [0, 11]
    pub fn distance_to(self, target: Key) -> u8 {
        (target.index() as i32 - self.index() as i32).rem_euclid(SEMITONES_PER_OCTAVE) as u8
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(KeyError::Empty);
        }
        Key::lookup(trimmed).ok_or_else(|| KeyError::Unrecognized(s.to_string()))
    }
}

/// Convert a flat spelling to its sharp equivalent.
///
/// Anything that is not one of the five recognized flats is returned
/// unchanged, including already-canonical names and garbage.
pub fn normalize_note(note: &str) -> &str {
    FLAT_TO_SHARP
        .iter()
        .find(|(flat, _)| *flat == note)
        .map(|(_, sharp)| *sharp)
        .unwrap_or(note)
}
