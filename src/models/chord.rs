//! Chord tokens
//!
//! A chord symbol as it appears in song text: a root (letter plus optional
//! accidental), an optional quality marker and an optional numeric extension.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::key::Key;

/// A chord symbol found on a line, with its zero-based character column
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChordPosition {
    pub chord: String,
    pub position: usize,
}

impl ChordPosition {
    pub fn new(chord: impl Into<String>, position: usize) -> Self {
        Self {
            chord: chord.into(),
            position,
        }
    }
}

/// A chord symbol split into its grammar parts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChordParts<'a> {
    /// Root as written, e.g. "Bb" or "F#"
    pub root: &'a str,
    /// Quality marker (m, maj, min, dim, aug, sus, add) or ""
    pub quality: &'a str,
    /// Numeric extension such as "7" or "9", or ""
    pub number: &'a str,
}

impl<'a> ChordParts<'a> {
    /// Resolve the root to a pitch class, if it names one
    pub fn root_key(&self) -> Option<Key> {
        Key::lookup(self.root)
    }

    /// Rebuild the chord with a different root, keeping quality and number
    pub fn with_root(&self, root: Key) -> String {
        format!("{}{}{}", root.as_str(), self.quality, self.number)
    }
}

impl fmt::Display for ChordParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.root, self.quality, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_position_serializes_camel_case() {
        let pos = ChordPosition::new("Am7", 4);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"chord":"Am7","position":4}"#);
    }

    #[test]
    fn test_root_key_resolves_flats() {
        let parts = ChordParts { root: "Eb", quality: "maj", number: "7" };
        assert_eq!(parts.root_key(), Some(Key::Ds));
        assert_eq!(parts.with_root(Key::F), "Fmaj7");
        assert_eq!(parts.to_string(), "Ebmaj7");
    }

    #[test]
    fn test_root_key_unresolved() {
        let parts = ChordParts { root: "Cb", quality: "", number: "" };
        assert_eq!(parts.root_key(), None);
    }
}
