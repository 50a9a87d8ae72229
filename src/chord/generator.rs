//! Random chord generation
//!
//! Picks a chord type and a root, stacks the intervals, doubles the root of
//! triads an octave up and hands the sorted pitches out to the four voices.

use rand::Rng;

use super::note_name::midi_to_note_name;
use super::types::{ChordType, GeneratedChord, Voices};
use crate::error::TrainerError;

/// Offset of the doubled root, the highest interval above the root.
const TOP_OFFSET: u8 = 12;

/// Range of MIDI pitches the root is drawn from.
///
/// The default A2–E3 (MIDI 45–52) keeps every voicing in a comfortable low to
/// mid register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootWindow {
    low: u8,
    span: u8,
}

impl RootWindow {
    /// Build a window of `span` consecutive roots starting at `low`.
    ///
    /// # Errors
    /// Returns [`TrainerError::ConfigError`] when `span` is zero or when the
    /// highest chord tone from the highest root would leave the MIDI range.
    pub fn new(low: u8, span: u8) -> Result<Self, TrainerError> {
        if span == 0 {
            return Err(TrainerError::ConfigError(
                "root-span must be at least 1".to_string(),
            ));
        }
        let highest_root = u16::from(low) + u16::from(span) - 1;
        if highest_root + u16::from(TOP_OFFSET) > 127 {
            return Err(TrainerError::ConfigError(format!(
                "root window {}..={} reaches above MIDI 127",
                low, highest_root
            )));
        }
        Ok(RootWindow { low, span })
    }

    pub fn low(&self) -> u8 {
        self.low
    }

    pub fn span(&self) -> u8 {
        self.span
    }

    pub fn high(&self) -> u8 {
        self.low + (self.span - 1)
    }

    pub fn contains(&self, midi: u8) -> bool {
        (self.low..=self.high()).contains(&midi)
    }
}

impl Default for RootWindow {
    fn default() -> Self {
        RootWindow { low: 45, span: 8 }
    }
}

/// Generate a random four-voice chord.
///
/// Both the chord type and the root are drawn uniformly.
///
/// # Examples
/// ```
/// use chord_trainer::{generate_chord, RootWindow};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let chord = generate_chord(&mut rng, RootWindow::default());
///
/// assert_eq!(chord.notes_midi.len(), 4);
/// assert!(RootWindow::default().contains(chord.root_midi));
/// ```
pub fn generate_chord<R: Rng + ?Sized>(rng: &mut R, window: RootWindow) -> GeneratedChord {
    let chord_type = ChordType::ALL[rng.random_range(0..ChordType::ALL.len())];
    let root = window.low + rng.random_range(0..window.span);
    voice_chord(chord_type, root)
}

impl GeneratedChord {
    /// Build the chord of `chord_type` on a fixed root.
    ///
    /// Returns `None` if the voicing would go above MIDI 127.
    ///
    /// # Examples
    /// ```
    /// use chord_trainer::{ChordType, GeneratedChord};
    ///
    /// // C minor on C3: C3 D#3 G3 plus the doubled root C4
    /// let chord = GeneratedChord::from_root(ChordType::Minor, 48).unwrap();
    /// assert_eq!(chord.notes_midi, vec![48, 51, 55, 60]);
    /// assert_eq!(chord.voices.soprano, "C4");
    /// ```
    pub fn from_root(chord_type: ChordType, root: u8) -> Option<GeneratedChord> {
        if u16::from(root) + u16::from(TOP_OFFSET) > 127 {
            return None;
        }
        Some(voice_chord(chord_type, root))
    }
}

/// Stack the intervals on `root` and assign voices. `root + 12` must fit in MIDI.
fn voice_chord(chord_type: ChordType, root: u8) -> GeneratedChord {
    let mut notes_midi: Vec<u8> = chord_type
        .intervals()
        .iter()
        .map(|interval| root + interval)
        .collect();

    // Triad -> four voices by doubling the root
    if notes_midi.len() == 3 {
        notes_midi.push(root + TOP_OFFSET);
    }

    notes_midi.sort_unstable();

    let bass = notes_midi[0];
    let tenor = notes_midi[1];
    let alto = notes_midi[2];
    let soprano = notes_midi[notes_midi.len() - 1];

    GeneratedChord {
        chord_type,
        root_midi: root,
        notes: notes_midi.iter().copied().map(midi_to_note_name).collect(),
        voices: Voices {
            bass: midi_to_note_name(bass),
            tenor: midi_to_note_name(tenor),
            alto: midi_to_note_name(alto),
            soprano: midi_to_note_name(soprano),
        },
        notes_midi,
    }
}
