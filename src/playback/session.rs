//! Session controller
//!
//! Holds the current chord and the per-role playback state, and turns the
//! trainer's user actions (new chord, play, stop, guess) into engine calls.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::engine::{EngineCell, EngineLoader, PlayOptions};
use super::state::PlaybackState;
use crate::chord::{generate_chord, ChordType, GeneratedChord, VoiceRole};
use crate::config::TrainerConfig;
use crate::error::TrainerError;

/// Result of checking a guess against the current chord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct {
        label: &'static str,
    },
    Incorrect {
        guessed_label: &'static str,
        correct_label: &'static str,
    },
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. })
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Correct { label } => write!(f, "Correct! That was: {}.", label),
            GuessOutcome::Incorrect {
                guessed_label,
                correct_label,
            } => write!(
                f,
                "Wrong. You chose “{}” – the answer is “{}”.",
                guessed_label, correct_label
            ),
        }
    }
}

/// One ear-training session
///
/// # Lifecycle
/// - [`Session::new_chord`] draws a chord and silences everything
/// - [`Session::play_voice`] sounds the whole chord or a single voice
/// - [`Session::stop_voice`] / [`Session::stop_all`] silence early
/// - [`Session::submit_guess`] checks a chord type id against the answer
///
/// Each role is either silent or sounding. Playing a sounding role stops its
/// current notes before scheduling new ones, so a role never holds more than
/// one set of handles. After the play duration a background timer marks the
/// role silent again; it runs on the tokio runtime that awaited `play_voice`.
pub struct Session<L> {
    config: TrainerConfig,
    engine: EngineCell<L>,
    rng: StdRng,
    current: Option<GeneratedChord>,
    playback: Arc<Mutex<PlaybackState>>,
}

impl<L: EngineLoader> Session<L> {
    pub fn new(config: TrainerConfig, loader: L) -> Self {
        Self::with_rng(config, loader, StdRng::from_os_rng())
    }

    /// Session with a fixed random source, for reproducible chord sequences.
    pub fn with_rng(config: TrainerConfig, loader: L, rng: StdRng) -> Self {
        Session {
            config,
            engine: EngineCell::new(loader),
            rng,
            current: None,
            playback: Arc::new(Mutex::new(PlaybackState::new())),
        }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn current_chord(&self) -> Option<&GeneratedChord> {
        self.current.as_ref()
    }

    /// Draw a new chord, make it current and stop every role.
    pub fn new_chord(&mut self) -> &GeneratedChord {
        let chord = generate_chord(&mut self.rng, self.config.root_window);
        debug!(
            chord_type = chord.chord_type.id(),
            root = chord.root_midi,
            notes = ?chord.notes,
            "new chord"
        );
        self.stop_all();
        self.current.insert(chord)
    }

    /// Play `role` for the configured duration.
    pub async fn play_voice(&self, role: VoiceRole) -> Result<(), TrainerError> {
        self.play_voice_for(role, self.config.duration).await
    }

    /// Play `role` for `duration`.
    ///
    /// # Errors
    /// - [`TrainerError::NoChordReady`] if no chord was generated yet; nothing changes.
    /// - [`TrainerError::EngineAcquisitionFailed`] if the instrument could not be loaded.
    pub async fn play_voice_for(&self, role: VoiceRole, duration: Duration) -> Result<(), TrainerError> {
        let notes = self
            .current
            .as_ref()
            .ok_or(TrainerError::NoChordReady)?
            .notes_for(role);

        let engine = self.engine.acquire().await?;

        let options = PlayOptions {
            gain: self.config.gain,
            duration: duration.as_secs_f64(),
        };

        {
            let mut state = lock(&self.playback);
            state.stop(role);
            let when = engine.current_time();
            let handles = notes
                .iter()
                .map(|note| engine.schedule_note(note, when, options))
                .collect();
            state.start(role, handles);
        }
        info!(%role, ?notes, seconds = options.duration, "playing");

        // Not tied to this play: a timer left over from an earlier play of the
        // same role may clear the flag before these notes end.
        let playback = Arc::clone(&self.playback);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            lock(&playback).mark_silent(role);
            debug!(%role, "play duration elapsed");
        });

        Ok(())
    }

    pub fn stop_voice(&self, role: VoiceRole) {
        let stopped = lock(&self.playback).stop(role);
        if stopped > 0 {
            debug!(%role, stopped, "stopped voice");
        }
    }

    pub fn stop_all(&self) {
        let stopped = lock(&self.playback).stop_all();
        if stopped > 0 {
            debug!(stopped, "stopped all voices");
        }
    }

    /// Compare a chord type id against the current chord.
    ///
    /// # Errors
    /// - [`TrainerError::NoChordReady`] if no chord was generated yet.
    /// - [`TrainerError::UnknownChordType`] if `guess_id` is not a palette id.
    pub fn submit_guess(&self, guess_id: &str) -> Result<GuessOutcome, TrainerError> {
        let chord = self.current.as_ref().ok_or(TrainerError::NoChordReady)?;
        let guessed = ChordType::from_id(guess_id)
            .ok_or_else(|| TrainerError::UnknownChordType(guess_id.to_string()))?;

        let correct = chord.chord_type;
        let outcome = if guessed == correct {
            GuessOutcome::Correct {
                label: correct.label(),
            }
        } else {
            GuessOutcome::Incorrect {
                guessed_label: guessed.label(),
                correct_label: correct.label(),
            }
        };
        info!(guess = guessed.id(), answer = correct.id(), correct = outcome.is_correct(), "guess");
        Ok(outcome)
    }

    pub fn is_sounding(&self, role: VoiceRole) -> bool {
        lock(&self.playback).is_sounding(role)
    }

    /// Number of note handles currently recorded for `role`.
    pub fn active_handles(&self, role: VoiceRole) -> usize {
        lock(&self.playback).handle_count(role)
    }

    pub fn sounding_roles(&self) -> Vec<VoiceRole> {
        lock(&self.playback).sounding_roles()
    }

    pub fn engine_loaded(&self) -> bool {
        self.engine.is_initialized()
    }
}

// A panic while holding the lock leaves the slots consistent, so keep going.
fn lock(state: &Mutex<PlaybackState>) -> MutexGuard<'_, PlaybackState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
