use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::error::TrainerError;

#[test]
fn test_minor_chord_on_c3() {
    let chord = GeneratedChord::from_root(ChordType::Minor, 48).unwrap();

    assert_eq!(chord.chord_type, ChordType::Minor);
    assert_eq!(chord.root_midi, 48);
    assert_eq!(chord.notes_midi, vec![48, 51, 55, 60]);
    assert_eq!(chord.notes, vec!["C3", "D#3", "G3", "C4"]);
    assert_eq!(chord.voices.bass, "C3");
    assert_eq!(chord.voices.tenor, "D#3");
    assert_eq!(chord.voices.alto, "G3");
    assert_eq!(chord.voices.soprano, "C4");
}

#[test]
fn test_seventh_chord_is_not_doubled() {
    // G7 on G2: G2 B2 D3 F3
    let chord = GeneratedChord::from_root(ChordType::DominantSeventh, 43).unwrap();
    assert_eq!(chord.notes_midi, vec![43, 47, 50, 53]);
    assert_eq!(chord.voices.soprano, "F3");
}

#[test]
fn test_triad_soprano_doubles_bass() {
    for chord_type in [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
    ] {
        let chord = GeneratedChord::from_root(chord_type, 45).unwrap();
        assert_eq!(chord.notes_midi[3], chord.notes_midi[0] + 12);
        assert_eq!(chord.voices.bass, "A2");
        assert_eq!(chord.voices.soprano, "A3");
    }
}

#[test]
fn test_augmented_on_e3() {
    // E3 G#3 C4 E4
    let chord = GeneratedChord::from_root(ChordType::Augmented, 52).unwrap();
    assert_eq!(chord.notes, vec!["E3", "G#3", "C4", "E4"]);
}

#[test]
fn test_from_root_rejects_out_of_range() {
    assert!(GeneratedChord::from_root(ChordType::Major, 115).is_some());
    assert!(GeneratedChord::from_root(ChordType::Major, 116).is_none());
}

#[test]
fn test_notes_for_roles() {
    let chord = GeneratedChord::from_root(ChordType::MajorSixth, 50).unwrap();
    // D3 F#3 A3 B3
    assert_eq!(chord.notes_for(VoiceRole::Chord), vec!["D3", "F#3", "A3", "B3"]);
    assert_eq!(chord.notes_for(VoiceRole::Bass), vec!["D3"]);
    assert_eq!(chord.notes_for(VoiceRole::Tenor), vec!["F#3"]);
    assert_eq!(chord.notes_for(VoiceRole::Alto), vec!["A3"]);
    assert_eq!(chord.notes_for(VoiceRole::Soprano), vec!["B3"]);
}

#[test]
fn test_generated_chords_are_sorted_four_voice() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let chord = generate_chord(&mut rng, RootWindow::default());
        assert_eq!(chord.notes_midi.len(), 4);
        assert_eq!(chord.notes.len(), 4);
        assert!(chord.notes_midi.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(chord.voices.bass, midi_to_note_name(chord.notes_midi[0]));
        assert_eq!(chord.voices.tenor, midi_to_note_name(chord.notes_midi[1]));
        assert_eq!(chord.voices.alto, midi_to_note_name(chord.notes_midi[2]));
        assert_eq!(chord.voices.soprano, midi_to_note_name(chord.notes_midi[3]));
        assert_eq!(chord.notes_midi[0], chord.root_midi);
    }
}

#[test]
fn test_roots_stay_in_window() {
    let mut rng = StdRng::seed_from_u64(2);
    let window = RootWindow::default();
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let chord = generate_chord(&mut rng, window);
        assert!((45..=52).contains(&chord.root_midi));
        seen.insert(chord.root_midi);
    }
    // Every root in the window shows up
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_custom_window() {
    let mut rng = StdRng::seed_from_u64(3);
    let window = RootWindow::new(60, 2).unwrap();
    for _ in 0..200 {
        let chord = generate_chord(&mut rng, window);
        assert!(chord.root_midi == 60 || chord.root_midi == 61);
    }
}

#[test]
fn test_palette_coverage() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        seen.insert(generate_chord(&mut rng, RootWindow::default()).chord_type);
    }
    assert_eq!(seen.len(), ChordType::ALL.len());
}

#[test]
fn test_root_window_validation() {
    assert!(matches!(
        RootWindow::new(45, 0),
        Err(TrainerError::ConfigError(_))
    ));
    // Highest root 115 + 12 = 127 is the last valid window
    assert!(RootWindow::new(108, 8).is_ok());
    assert!(RootWindow::new(109, 8).is_err());

    let window = RootWindow::default();
    assert_eq!(window.low(), 45);
    assert_eq!(window.high(), 52);
    assert!(!window.contains(44));
    assert!(!window.contains(53));
}

#[test]
fn test_chord_type_ids_and_labels() {
    let ids: Vec<&str> = ChordType::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(
        ids,
        vec!["Dur", "Durmaj", "Dur7", "Dur6", "Moll", "Moll7", "Moll6", "Vermindert", "Übermäßig"]
    );
    assert_eq!(ChordType::MajorSeventh.label(), "Dur maj");
    assert_eq!(ChordType::Augmented.label(), "Übermäßig");

    for chord_type in ChordType::ALL {
        assert_eq!(ChordType::from_id(chord_type.id()), Some(chord_type));
        assert_eq!(chord_type.intervals()[0], 0);
    }
    assert_eq!(ChordType::from_id("dur"), None);
}

#[test]
fn test_voice_role_parsing() {
    assert_eq!("bass".parse::<VoiceRole>(), Ok(VoiceRole::Bass));
    assert_eq!(" Soprano ".parse::<VoiceRole>(), Ok(VoiceRole::Soprano));
    assert_eq!("chord".parse::<VoiceRole>(), Ok(VoiceRole::Chord));
    assert_eq!(
        "baritone".parse::<VoiceRole>(),
        Err(TrainerError::UnknownVoiceRole("baritone".to_string()))
    );
    for role in VoiceRole::ALL {
        assert_eq!(role.to_string().parse::<VoiceRole>(), Ok(role));
    }
}
