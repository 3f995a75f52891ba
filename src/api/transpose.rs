//! Transposition operations for the WASM API
//!
//! Thin wrappers exposing the engine to the song detail and projection
//! views under their JavaScript names. Plain strings, numbers and booleans
//! cross the boundary directly; structured results go through
//! serde-wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, serialize, to_js_error};
use crate::models::key::{Key, ALL_KEYS};
use crate::structure::{self, ClassifierConfig};
use crate::transposition;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Ordered list of the 12 canonical key names, C first
#[wasm_bindgen(js_name = getAllKeys)]
pub fn get_all_keys() -> js_sys::Array {
    ALL_KEYS.iter().map(|k| JsValue::from_str(k)).collect()
}

/// Canonical sharp spelling of a note; unrecognized input is returned as-is
#[wasm_bindgen(js_name = normalizeNote)]
pub fn normalize_note(note: &str) -> String {
    transposition::normalize_note(note).to_string()
}

/// Semitones from one key up to another, in [0, 11]; 0 if either is unknown
#[wasm_bindgen(js_name = getSemitoneDifference)]
pub fn get_semitone_difference(from_key: &str, to_key: &str) -> u8 {
    transposition::semitone_difference(from_key, to_key)
}

#[wasm_bindgen(js_name = isChordLine)]
pub fn is_chord_line(line: &str) -> bool {
    structure::is_chord_line(line)
}

/// Chords in a line with their character columns
///
/// # Returns
/// JavaScript array of `{ chord, position }` objects
#[wasm_bindgen(js_name = parseChordLine)]
pub fn parse_chord_line(line: &str) -> Result<JsValue, JsValue> {
    let chords = structure::parse_chord_line(line);
    serialize(&chords, "parseChordLine serialization error")
}

#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(text: &str, semitones: i32) -> String {
    transposition::transpose_chord(text, semitones)
}

#[wasm_bindgen(js_name = transposeLyrics)]
pub fn transpose_lyrics(lyrics: &str, semitones: i32) -> String {
    wasm_log!("transposeLyrics: {} bytes, {} semitones", lyrics.len(), semitones);
    transposition::transpose_lyrics(lyrics, semitones)
}

/// Display-ready lyrics for a song stored in `from_key`, shown in `to_key`
#[wasm_bindgen(js_name = transposeToKey)]
pub fn transpose_to_key(lyrics: &str, from_key: &str, to_key: &str) -> String {
    wasm_log!("transposeToKey: {} -> {}", from_key, to_key);
    if Key::lookup(from_key).is_none() || Key::lookup(to_key).is_none() {
        wasm_warn!("transposeToKey: unresolved key ({} -> {}), lyrics left as stored", from_key, to_key);
    }
    transposition::transpose_to_key(lyrics, from_key, to_key)
}

#[wasm_bindgen(js_name = parsePastedLyrics)]
pub fn parse_pasted_lyrics(text: &str) -> String {
    transposition::parse_pasted_lyrics(text)
}

/// Next/previous key for the transpose buttons
#[wasm_bindgen(js_name = stepKey)]
pub fn step_key(key: &str, steps: i32) -> String {
    transposition::step_key(key, steps)
}

/// Setlist override key if set, otherwise the song's original key
#[wasm_bindgen(js_name = effectiveKey)]
pub fn effective_key(original_key: &str, transposed_key: Option<String>) -> String {
    transposition::effective_key(original_key, transposed_key.as_deref()).to_string()
}

/// Canonical name for a key, or an error for anything unrecognized
#[wasm_bindgen(js_name = validateKey)]
pub fn validate_key(name: &str) -> Result<String, JsValue> {
    name.parse::<Key>()
        .map(|k| k.as_str().to_string())
        .map_err(|e| to_js_error("validateKey", e))
}

/// Lay out a song for display in `to_key`
///
/// # Parameters
/// - `options`: optional `{ chordRatioThreshold }`; `undefined` uses defaults
///
/// # Returns
/// JavaScript object `{ key, semitones, lines }` where each line is
/// `{ kind: "chords", text, chords }` or `{ kind: "lyrics", text }`
#[wasm_bindgen(js_name = layoutSong)]
pub fn layout_song(
    lyrics: &str,
    from_key: &str,
    to_key: &str,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let config: ClassifierConfig = deserialize_or_default(options, "layoutSong options error")?;
    let sheet = structure::layout_song_with(lyrics, from_key, to_key, &config);
    wasm_info!(
        "layoutSong: {} -> {}, {} lines ({} chord lines), {} semitones",
        from_key,
        to_key,
        sheet.lines.len(),
        sheet.chord_lines().count(),
        sheet.semitones
    );
    serialize(&sheet, "layoutSong serialization error")
}
