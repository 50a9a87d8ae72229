pub mod chord;
pub mod config;
pub mod error;
pub mod playback;

pub use chord::{generate_chord, midi_to_note_name, ChordType, GeneratedChord, RootWindow, VoiceRole, Voices};
pub use config::TrainerConfig;
pub use error::*;
pub use playback::{
    Engine, EngineCell, EngineLoader, GuessOutcome, InstrumentSpec, LoggingLoader, NoteHandle, PlayOptions,
    SampleFormat, Session,
};
