//! Song sheet layout
//!
//! Turns stored lyrics into display-ready lines for a target key: chord
//! lines carry their chord symbols and columns so a view can position
//! them over the lyric below; lyric lines carry their text only. Styling is
//! left to the caller.

use serde::{Deserialize, Serialize};

use crate::models::chord::ChordPosition;
use crate::structure::line_analysis::{is_chord_line_with, parse_chord_line, ClassifierConfig};
use crate::transposition::chord_transpose::transpose_chord;
use crate::transposition::semitones::semitone_difference;

/// One line of a laid-out song
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SheetLine {
    Chords {
        text: String,
        chords: Vec<ChordPosition>,
    },
    Lyrics {
        text: String,
    },
}

impl SheetLine {
    pub fn text(&self) -> &str {
        match self {
            SheetLine::Chords { text, .. } | SheetLine::Lyrics { text } => text.as_str(),
        }
    }

    pub fn is_chords(&self) -> bool {
        matches!(self, SheetLine::Chords { .. })
    }
}

/// A song transposed into a display key and split into lines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SongSheet {
    /// Key the chords are shown in, as the caller asked for it
    pub key: String,
    /// Semitones applied to the stored chords
    pub semitones: u8,
    pub lines: Vec<SheetLine>,
}

impl SongSheet {
    /// Chord lines only, in order
    pub fn chord_lines(&self) -> impl Iterator<Item = &SheetLine> {
        self.lines.iter().filter(|line| line.is_chords())
    }

    /// Reassemble the transposed text
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(SheetLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lay out a song for `to_key` using the default classifier
pub fn layout_song(lyrics: &str, from_key: &str, to_key: &str) -> SongSheet {
    layout_song_with(lyrics, from_key, to_key, &ClassifierConfig::default())
}

/// Lay out a song for `to_key`.
///
/// The output has exactly one entry per input line, and chord lines are
/// exactly the lines `transpose_to_key` would rewrite under the same
/// classifier. Unresolvable keys fall back to no transposition, as
/// everywhere else in the engine.
pub fn layout_song_with(
    lyrics: &str,
    from_key: &str,
    to_key: &str,
    config: &ClassifierConfig,
) -> SongSheet {
    let semitones = semitone_difference(from_key, to_key);

    let lines = lyrics
        .split('\n')
        .map(|line| {
            if !is_chord_line_with(line, config) {
                return SheetLine::Lyrics {
                    text: line.to_string(),
                };
            }

            let text = if semitones == 0 {
                line.to_string()
            } else {
                transpose_chord(line, semitones as i32)
            };
            let chords = parse_chord_line(&text);
            SheetLine::Chords { text, chords }
        })
        .collect();

    log::debug!(
        "layout_song: {} -> {} ({} semitones)",
        from_key,
        to_key,
        semitones
    );

    SongSheet {
        key: to_key.to_string(),
        semitones,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_classifies_and_transposes() {
        let sheet = layout_song("C       G\nAmazing grace", "C", "D");

        assert_eq!(sheet.semitones, 2);
        assert_eq!(sheet.lines.len(), 2);
        assert_eq!(
            sheet.lines[0],
            SheetLine::Chords {
                text: "D       A".to_string(),
                chords: vec![ChordPosition::new("D", 0), ChordPosition::new("A", 8)],
            }
        );
        assert_eq!(
            sheet.lines[1],
            SheetLine::Lyrics { text: "Amazing grace".to_string() }
        );
    }

    #[test]
    fn test_layout_keeps_blank_lines() {
        let sheet = layout_song("G\nline one\n\nD\nline two\n", "G", "G");
        assert_eq!(sheet.lines.len(), 6);
        assert_eq!(sheet.chord_lines().count(), 2);
        assert_eq!(sheet.to_text(), "G\nline one\n\nD\nline two\n");
    }

    #[test]
    fn test_layout_unresolved_key_is_untransposed() {
        let sheet = layout_song("C G", "C", "Am");
        assert_eq!(sheet.semitones, 0);
        assert_eq!(sheet.lines[0].text(), "C G");
        assert_eq!(sheet.key, "Am");
    }

    #[test]
    fn test_layout_serializes_tagged() {
        let sheet = layout_song("C\nhi", "C", "C");
        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json["lines"][0]["kind"], "chords");
        assert_eq!(json["lines"][0]["chords"][0]["position"], 0);
        assert_eq!(json["lines"][1]["kind"], "lyrics");
        assert_eq!(json["lines"][1]["text"], "hi");
    }
}
