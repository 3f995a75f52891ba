// Song sheet layout as used by the song detail and projection views

use chordsheet_wasm::{
    all_keys, effective_key, layout_song, layout_song_with, parse_pasted_lyrics, step_key,
    transpose_to_key, try_semitone_difference, ChordPosition, ClassifierConfig, KeyError, SheetLine,
};

const PASTED: &str = "

D          G        D
Amazing grace how sweet the sound
D                   A
That saved a wretch like me

";

#[test]
fn test_setlist_override_key_drives_layout() {
    let lyrics = parse_pasted_lyrics(PASTED);
    let key = effective_key("D", Some("E"));
    let sheet = layout_song(&lyrics, "D", key);

    assert_eq!(sheet.key, "E");
    assert_eq!(sheet.semitones, 2);
    assert_eq!(sheet.lines.len(), 4);

    assert_eq!(
        sheet.lines[0],
        SheetLine::Chords {
            text: "E          A        E".to_string(),
            chords: vec![
                ChordPosition::new("E", 0),
                ChordPosition::new("A", 11),
                ChordPosition::new("E", 20),
            ],
        }
    );
    assert!(!sheet.lines[1].is_chords());
    assert_eq!(sheet.lines[3].text(), "That saved a wretch like me");
}

#[test]
fn test_no_override_uses_original_key() {
    let lyrics = parse_pasted_lyrics(PASTED);
    let sheet = layout_song(&lyrics, "D", effective_key("D", None));

    assert_eq!(sheet.semitones, 0);
    assert_eq!(sheet.to_text(), lyrics);
}

#[test]
fn test_chord_columns_follow_width_changes() {
    // C -> C# widens the first chord, shifting the next one's column
    let sheet = layout_song("C D", "C", "C#");
    match &sheet.lines[0] {
        SheetLine::Chords { text, chords } => {
            assert_eq!(text, "C# D#");
            assert_eq!(chords[1], ChordPosition::new("D#", 3));
        }
        other => panic!("expected chord line, got {:?}", other),
    }
}

#[test]
fn test_stepping_through_keys_cycles() {
    let mut key = "C".to_string();
    for _ in 0..12 {
        key = step_key(&key, 1);
    }
    assert_eq!(key, "C");

    assert_eq!(step_key("C", -1), "B");
}

#[test]
fn test_strict_key_check_before_transposing() {
    assert_eq!(try_semitone_difference("Bb", "C"), Ok(2));
    assert!(matches!(
        try_semitone_difference("Bb", "Cm"),
        Err(KeyError::Unrecognized(_))
    ));
}

#[test]
fn test_custom_classifier_threshold() {
    // 1 chord word out of 2
    let lenient = layout_song("G walk", "G", "A");
    assert_eq!(lenient.lines[0].text(), "A walk");
    assert!(lenient.lines[0].is_chords());

    let strict = ClassifierConfig { chord_ratio_threshold: 0.5 };
    let sheet = layout_song_with("G walk", "G", "A", &strict);
    assert_eq!(sheet.lines[0], SheetLine::Lyrics { text: "G walk".to_string() });
}

#[test]
fn test_layout_text_matches_transpose_to_key() {
    let lyrics = parse_pasted_lyrics(PASTED);
    for key in all_keys() {
        let sheet = layout_song(&lyrics, "D", key);
        assert_eq!(sheet.to_text(), transpose_to_key(&lyrics, "D", key));
    }
}
