//! # Chord Module
//!
//! Generate random four-voice chords for the ear-training exercise.
//!
//! ## Sub-modules
//! - `types` - ChordType palette, VoiceRole, GeneratedChord
//! - `generator` - Random chord generation and voicing
//! - `note_name` - MIDI pitch to note name conversion
//!
//! ## Key Types
//! - [`ChordType`] - The nine chord types (Dur, Dur maj, Dur7, Dur6, Moll, Moll7, Moll6,
//!   Vermindert, Übermäßig)
//! - [`GeneratedChord`] - A voiced chord with its bass/tenor/alto/soprano notes
//! - [`VoiceRole`] - `chord` or one of the four single voices
//!
//! ## Entry Point
//! [`generate_chord()`] - Draw a chord type and root, then voice the chord
//!
//! ## Voicing
//!
//! 1. Stack the chord type's intervals on the root
//! 2. Triads get the root doubled one octave up (four voices always)
//! 3. Sort ascending
//! 4. Bass = lowest, tenor = second, alto = third, soprano = highest
//!
//! ```rust
//! use chord_trainer::{ChordType, GeneratedChord};
//!
//! let chord = GeneratedChord::from_root(ChordType::Minor, 48).unwrap();
//! assert_eq!(chord.voices.bass, "C3");
//! assert_eq!(chord.voices.tenor, "D#3");
//! assert_eq!(chord.voices.alto, "G3");
//! assert_eq!(chord.voices.soprano, "C4");
//! ```

mod generator;
mod note_name;
mod types;

#[cfg(test)]
mod tests;

pub use generator::{generate_chord, RootWindow};
pub use note_name::midi_to_note_name;
pub use types::{ChordType, GeneratedChord, VoiceRole, Voices};
