//! Key-to-key interval arithmetic
//!
//! Distances are measured clockwise around the chromatic circle, so the
//! result is always in [0, 11] and B -> C is 1, never -11.

use crate::models::key::{Key, KeyError, ALL_KEYS};

/// Ordered list of the 12 canonical key names, C first
pub fn all_keys() -> Vec<&'static str> {
    ALL_KEYS.to_vec()
}

/// Semitones from `from_key` up to `to_key`.
///
/// Either name may be sharp or flat. If either one does not resolve to a
/// pitch class the result is 0, meaning "leave the chords alone".
pub fn semitone_difference(from_key: &str, to_key: &str) -> u8 {
    match (Key::lookup(from_key), Key::lookup(to_key)) {
        (Some(from), Some(to)) => from.distance_to(to),
        _ => {
            log::debug!(
                "semitone_difference: unresolved key ({:?} -> {:?}), using 0",
                from_key,
                to_key
            );
            0
        }
    }
}

/// Strict variant of [`semitone_difference`] for callers that need to tell
/// "same key" apart from "unknown key".
pub fn try_semitone_difference(from_key: &str, to_key: &str) -> Result<u8, KeyError> {
    let from: Key = from_key.parse()?;
    let to: Key = to_key.parse()?;
    Ok(from.distance_to(to))
}

/// Move a key `steps` positions around the chromatic circle.
///
/// Backs the transpose up/down buttons: `step_key("B", 1)` is "C",
/// `step_key("Db", -1)` is "C". Unrecognized names come back unchanged.
pub fn step_key(key: &str, steps: i32) -> String {
    match Key::lookup(key) {
        Some(k) => k.transpose(steps).as_str().to_string(),
        None => key.to_string(),
    }
}

/// The key a setlist entry should be shown in.
///
/// A per-setlist override wins when it is present and not blank; otherwise
/// the song's stored key is used.
pub fn effective_key<'a>(original_key: &'a str, transposed_key: Option<&'a str>) -> &'a str {
    match transposed_key {
        Some(k) if !k.trim().is_empty() => k,
        _ => original_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_order() {
        let keys = all_keys();
        assert_eq!(keys.len(), 12);
        assert_eq!(keys[0], "C");
        assert_eq!(keys[11], "B");
        assert!(keys.iter().all(|k| !k.contains('b')));
    }

    #[test]
    fn test_difference_basic() {
        assert_eq!(semitone_difference("C", "D"), 2);
        assert_eq!(semitone_difference("G", "D"), 7);
        assert_eq!(semitone_difference("B", "C"), 1);
        assert_eq!(semitone_difference("C", "B"), 11);
    }

    #[test]
    fn test_difference_same_key_is_zero() {
        for key in ALL_KEYS {
            assert_eq!(semitone_difference(key, key), 0);
        }
    }

    #[test]
    fn test_difference_symmetry() {
        for a in ALL_KEYS {
            for b in ALL_KEYS {
                if a == b {
                    continue;
                }
                let forward = semitone_difference(a, b);
                let backward = semitone_difference(b, a);
                assert_eq!(forward, (12 - backward) % 12, "{} <-> {}", a, b);
            }
        }
    }

    #[test]
    fn test_difference_flat_sharp_equivalence() {
        assert_eq!(
            semitone_difference("Db", "F#"),
            semitone_difference("C#", "F#")
        );
        assert_eq!(semitone_difference("Bb", "A#"), 0);
        assert_eq!(semitone_difference("Eb", "Gb"), 3);
    }

    #[test]
    fn test_difference_unresolved_is_zero() {
        assert_eq!(semitone_difference("H", "C"), 0);
        assert_eq!(semitone_difference("C", "Am"), 0);
        assert_eq!(semitone_difference("", ""), 0);
    }

    #[test]
    fn test_try_difference() {
        assert_eq!(try_semitone_difference("C", "D"), Ok(2));
        assert_eq!(
            try_semitone_difference("C", "Am"),
            Err(KeyError::Unrecognized("Am".to_string()))
        );
        assert_eq!(try_semitone_difference("", "C"), Err(KeyError::Empty));
    }

    #[test]
    fn test_step_key() {
        assert_eq!(step_key("C", 1), "C#");
        assert_eq!(step_key("B", 1), "C");
        assert_eq!(step_key("C", -1), "B");
        assert_eq!(step_key("Db", -1), "C");
        assert_eq!(step_key("G", 12), "G");
        assert_eq!(step_key("Am", 1), "Am");
        assert_eq!(step_key("B", i32::MAX), "F#");
        assert_eq!(step_key("B", i32::MIN), "D#");
    }

    #[test]
    fn test_effective_key() {
        assert_eq!(effective_key("G", None), "G");
        assert_eq!(effective_key("G", Some("A")), "A");
        assert_eq!(effective_key("G", Some("")), "G");
        assert_eq!(effective_key("G", Some("  ")), "G");
    }
}
