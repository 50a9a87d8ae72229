//! Instrument backend interface
//!
//! The trainer never produces sound itself. It talks to an [`Engine`] that can
//! schedule a named note on its own audio clock and hands back a
//! [`NoteHandle`] for stopping it early. Engines are produced by an
//! [`EngineLoader`], and [`EngineCell`] makes sure the loader runs once.

use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::error::TrainerError;

/// Per-note playback options
///
/// - `gain`: Linear volume, 0.0 to 1.0
/// - `duration`: Seconds the note sounds before it ends on its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayOptions {
    pub gain: f64,
    pub duration: f64,
}

/// Sample file format of the instrument library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    #[default]
    Mp3,
    Ogg,
}

/// Which sampled instrument to load, and from which sample library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentSpec {
    pub name: String,
    pub soundfont: String,
    pub format: SampleFormat,
}

impl Default for InstrumentSpec {
    fn default() -> Self {
        InstrumentSpec {
            name: "acoustic_grand_piano".to_string(),
            soundfont: "FluidR3_GM".to_string(),
            format: SampleFormat::Mp3,
        }
    }
}

/// A scheduled note that can be silenced before it ends.
pub trait NoteHandle: Send {
    /// Stop the note. Calling this again, or after the note has finished,
    /// does nothing.
    fn stop(&self);
}

/// An audio clock plus a loaded instrument.
pub trait Engine: Send + Sync {
    /// Current position of the audio clock, in seconds.
    fn current_time(&self) -> f64;

    /// Schedule `note` (e.g. `"D#3"`) to start at `start_time` on the audio clock.
    fn schedule_note(&self, note: &str, start_time: f64, options: PlayOptions) -> Box<dyn NoteHandle>;
}

/// Produces an [`Engine`], typically by fetching instrument samples.
pub trait EngineLoader: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Arc<dyn Engine>, TrainerError>> + Send;
}

/// Memoized engine acquisition
///
/// The first call to [`EngineCell::acquire`] runs the loader. Callers arriving
/// while that load is in flight wait for the same load, and every later call
/// gets the stored result back. A failed load is stored as well, so the loader
/// runs at most once per cell.
pub struct EngineCell<L> {
    loader: L,
    engine: OnceCell<Result<Arc<dyn Engine>, TrainerError>>,
}

impl<L: EngineLoader> EngineCell<L> {
    pub fn new(loader: L) -> Self {
        EngineCell {
            loader,
            engine: OnceCell::new(),
        }
    }

    pub async fn acquire(&self) -> Result<Arc<dyn Engine>, TrainerError> {
        self.engine
            .get_or_init(|| async {
                info!("loading instrument engine");
                let result = self.loader.load().await;
                match &result {
                    Ok(_) => info!("instrument engine ready"),
                    Err(e) => warn!(error = %e, "instrument engine failed to load"),
                }
                result
            })
            .await
            .clone()
    }

    /// Whether a load has completed, successfully or not.
    pub fn is_initialized(&self) -> bool {
        self.engine.initialized()
    }
}
