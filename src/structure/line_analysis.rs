//! Line analysis: chord-line detection and chord extraction
//!
//! Song text mixes chord lines and lyric lines with no markup. A line is a
//! chord line when enough of its words are chord symbols; that decision is a
//! pure function of the line and is never stored.

use serde::{Deserialize, Serialize};

use crate::models::chord::ChordPosition;
use crate::parse::chord_grammar::{is_chord_word, scan_chords};

/// Default share of chord words above which a line counts as a chord line
pub const DEFAULT_CHORD_RATIO_THRESHOLD: f64 = 0.4;

/// Tuning for chord-line detection
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// A line is a chord line when chord words / all words is strictly
    /// greater than this.
    pub chord_ratio_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            chord_ratio_threshold: DEFAULT_CHORD_RATIO_THRESHOLD,
        }
    }
}

/// Check whether a line is dominated by chord symbols (default threshold)
pub fn is_chord_line(line: &str) -> bool {
    is_chord_line_with(line, &ClassifierConfig::default())
}

/// Check whether a line is dominated by chord symbols
///
/// Blank lines are never chord lines. Annotations such as "x2" or "(riff)"
/// are tolerated as long as chord words still make up more than the
/// threshold share of the words.
pub fn is_chord_line_with(line: &str, config: &ClassifierConfig) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut words = 0usize;
    let mut chord_words = 0usize;
    for word in trimmed.split_whitespace() {
        words += 1;
        if is_chord_word(word) {
            chord_words += 1;
        }
    }

    chord_words as f64 / words as f64 > config.chord_ratio_threshold
}

/// Extract every chord in a line together with its character column.
///
/// Columns are counted in characters from the start of the original
/// (untrimmed) line, so they can be used to place chords over lyrics.
pub fn parse_chord_line(line: &str) -> Vec<ChordPosition> {
    let mut chords = Vec::new();
    let mut byte_cursor = 0;
    let mut column = 0;

    for found in scan_chords(line) {
        column += line[byte_cursor..found.start].chars().count();
        byte_cursor = found.start;
        chords.push(ChordPosition::new(found.text(line), column));
    }

    chords
}
