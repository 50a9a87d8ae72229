//! # Playback Module
//!
//! Session state and the boundary to the instrument backend.
//!
//! ## Purpose
//! The trainer needs to:
//! 1. **Sound a chord or one voice** - schedule note names on an external instrument
//! 2. **Stop early** - keep the handles of whatever is sounding, per voice role
//! 3. **Track UI state** - know which roles are sounding right now
//! 4. **Check guesses** - compare a chord type id against the current chord
//!
//! ## Sub-modules
//! - `engine` - Engine / NoteHandle / EngineLoader traits and the memoized EngineCell
//! - `state` - PlaybackState: handles and sounding flag per voice role
//! - `session` - Session controller and GuessOutcome
//! - `logging` - Engine backend that logs scheduled notes through `tracing`
//!
//! ## Key Types
//! - [`Session`] - Owns the current chord and the playback state
//! - [`Engine`] - Audio clock plus loaded instrument
//! - [`EngineCell`] - Loads the engine once, shared by every play request
//!
//! ## Example
//! ```rust
//! use chord_trainer::{LoggingLoader, Session, TrainerConfig, VoiceRole};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), chord_trainer::TrainerError> {
//! let mut session = Session::new(TrainerConfig::default(), LoggingLoader::default());
//! let answer = session.new_chord().chord_type;
//!
//! session.play_voice(VoiceRole::Chord).await?;
//! assert!(session.is_sounding(VoiceRole::Chord));
//! assert_eq!(session.active_handles(VoiceRole::Chord), 4);
//!
//! let outcome = session.submit_guess(answer.id())?;
//! assert!(outcome.is_correct());
//! # Ok(())
//! # }
//! ```
//!
//! ## Voice Role States
//!
//! ```text
//! Silent --play--> Sounding --stop / duration elapsed--> Silent
//!                  Sounding --play--> (stop, then play) Sounding
//! ```
//!
//! The "duration elapsed" transition only clears the flag; the backend ends
//! the notes itself.

mod engine;
mod logging;
mod session;
mod state;


pub use engine::{Engine, EngineCell, EngineLoader, InstrumentSpec, NoteHandle, PlayOptions, SampleFormat};
pub use logging::{LoggingEngine, LoggingHandle, LoggingLoader};
pub use session::{GuessOutcome, Session};
pub use state::PlaybackState;
