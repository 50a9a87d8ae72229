//! MIDI pitch to note name conversion
//!
//! Names use sharps only and scientific octave numbering, where the octave
//! number changes at C and MIDI 60 is C4.

const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Convert a MIDI note number to a note name such as `"D#3"`.
///
/// # Examples
/// ```
/// use chord_trainer::midi_to_note_name;
///
/// assert_eq!(midi_to_note_name(60), "C4");
/// assert_eq!(midi_to_note_name(51), "D#3");
/// assert_eq!(midi_to_note_name(45), "A2");
/// assert_eq!(midi_to_note_name(0), "C-1");
/// ```
pub fn midi_to_note_name(midi: u8) -> String {
    let pitch_class = PITCH_CLASSES[(midi % 12) as usize];
    let octave = i16::from(midi / 12) - 1;
    format!("{}{}", pitch_class, octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octave_boundaries() {
        assert_eq!(midi_to_note_name(47), "B2");
        assert_eq!(midi_to_note_name(48), "C3");
        assert_eq!(midi_to_note_name(59), "B3");
        assert_eq!(midi_to_note_name(127), "G9");
    }

    #[test]
    fn test_sharps_in_default_window() {
        // A2 through E3
        let names: Vec<String> = (45..=52).map(midi_to_note_name).collect();
        assert_eq!(names, vec!["A2", "A#2", "B2", "C3", "C#3", "D3", "D#3", "E3"]);
    }
}
