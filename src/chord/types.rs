//! Chord type definitions
//!
//! The closed chord palette, voice roles, and the generated chord itself.

use std::fmt;
use std::str::FromStr;

use crate::error::TrainerError;

/// One of the nine chord types a user can be asked to recognise.
///
/// Identifiers and labels are the German chord names shown on the answer
/// buttons; `Übermäßig` keeps its umlauts in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordType {
    Major,
    MajorSeventh,
    DominantSeventh,
    MajorSixth,
    Minor,
    MinorSeventh,
    MinorSixth,
    Diminished,
    Augmented,
}

impl ChordType {
    /// The palette, in answer-button order.
    pub const ALL: [ChordType; 9] = [
        ChordType::Major,
        ChordType::MajorSeventh,
        ChordType::DominantSeventh,
        ChordType::MajorSixth,
        ChordType::Minor,
        ChordType::MinorSeventh,
        ChordType::MinorSixth,
        ChordType::Diminished,
        ChordType::Augmented,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ChordType::Major => "Dur",
            ChordType::MajorSeventh => "Durmaj",
            ChordType::DominantSeventh => "Dur7",
            ChordType::MajorSixth => "Dur6",
            ChordType::Minor => "Moll",
            ChordType::MinorSeventh => "Moll7",
            ChordType::MinorSixth => "Moll6",
            ChordType::Diminished => "Vermindert",
            ChordType::Augmented => "Übermäßig",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChordType::MajorSeventh => "Dur maj",
            other => other.id(),
        }
    }

    /// Semitone offsets from the root, always starting at 0.
    ///
    /// Intervals: minor 3rd = 3, major 3rd = 4, diminished 5th = 6,
    /// perfect 5th = 7, augmented 5th = 8, major 6th = 9, minor 7th = 10,
    /// major 7th = 11.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::MajorSeventh => &[0, 4, 7, 11],
            ChordType::DominantSeventh => &[0, 4, 7, 10],
            ChordType::MajorSixth => &[0, 4, 7, 9],
            ChordType::Minor => &[0, 3, 7],
            ChordType::MinorSeventh => &[0, 3, 7, 10],
            ChordType::MinorSixth => &[0, 3, 7, 9],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
        }
    }

    /// Look up a chord type by its identifier.
    ///
    /// # Examples
    /// ```
    /// use chord_trainer::ChordType;
    ///
    /// assert_eq!(ChordType::from_id("Moll7"), Some(ChordType::MinorSeventh));
    /// assert_eq!(ChordType::from_id("sus4"), None);
    /// ```
    pub fn from_id(id: &str) -> Option<ChordType> {
        ChordType::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named voice group that can be played and stopped independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceRole {
    /// All four notes together
    Chord,
    Soprano,
    Alto,
    Tenor,
    Bass,
}

impl VoiceRole {
    pub const ALL: [VoiceRole; 5] = [
        VoiceRole::Chord,
        VoiceRole::Soprano,
        VoiceRole::Alto,
        VoiceRole::Tenor,
        VoiceRole::Bass,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VoiceRole::Chord => "chord",
            VoiceRole::Soprano => "soprano",
            VoiceRole::Alto => "alto",
            VoiceRole::Tenor => "tenor",
            VoiceRole::Bass => "bass",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            VoiceRole::Chord => 0,
            VoiceRole::Soprano => 1,
            VoiceRole::Alto => 2,
            VoiceRole::Tenor => 3,
            VoiceRole::Bass => 4,
        }
    }
}

impl fmt::Display for VoiceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceRole {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoiceRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrainerError::UnknownVoiceRole(s.to_string()))
    }
}

/// Note names for each single voice, lowest to highest.
#[derive(Debug, Clone, PartialEq)]
pub struct Voices {
    pub bass: String,
    pub tenor: String,
    pub alto: String,
    pub soprano: String,
}

/// A randomly generated four-voice chord
///
/// # Fields
/// - `chord_type`: The palette entry the chord was built from
/// - `root_midi`: MIDI pitch of the root before voicing
/// - `notes_midi`: The four pitches, sorted ascending
/// - `notes`: Note names for `notes_midi`, same order
/// - `voices`: Note name per single voice
///
/// Triads get the root doubled an octave up, so `notes_midi` always holds four
/// pitches. In that case the soprano is the bass one octave higher.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedChord {
    pub chord_type: ChordType,
    pub root_midi: u8,
    pub notes_midi: Vec<u8>,
    pub notes: Vec<String>,
    pub voices: Voices,
}

impl GeneratedChord {
    /// Note names sounded when `role` is played.
    pub fn notes_for(&self, role: VoiceRole) -> Vec<String> {
        match role {
            VoiceRole::Chord => self.notes.clone(),
            VoiceRole::Soprano => vec![self.voices.soprano.clone()],
            VoiceRole::Alto => vec![self.voices.alto.clone()],
            VoiceRole::Tenor => vec![self.voices.tenor.clone()],
            VoiceRole::Bass => vec![self.voices.bass.clone()],
        }
    }
}
