//! Engine backend that reports scheduled notes through `tracing`
//!
//! Stands in for a sample-playback library: the clock runs from the moment the
//! engine is loaded, each scheduled note is logged, and handles only remember
//! whether they were stopped.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info};

use super::engine::{Engine, EngineLoader, InstrumentSpec, NoteHandle, PlayOptions};
use crate::error::TrainerError;

#[derive(Debug, Clone, Default)]
pub struct LoggingLoader {
    instrument: InstrumentSpec,
}

impl LoggingLoader {
    pub fn new(instrument: InstrumentSpec) -> Self {
        LoggingLoader { instrument }
    }
}

impl EngineLoader for LoggingLoader {
    async fn load(&self) -> Result<Arc<dyn Engine>, TrainerError> {
        info!(
            instrument = %self.instrument.name,
            soundfont = %self.instrument.soundfont,
            format = ?self.instrument.format,
            "instrument resolved"
        );
        let engine: Arc<dyn Engine> = Arc::new(LoggingEngine::new(self.instrument.clone()));
        Ok(engine)
    }
}

pub struct LoggingEngine {
    instrument: InstrumentSpec,
    origin: Instant,
    next_id: AtomicU64,
}

impl LoggingEngine {
    pub fn new(instrument: InstrumentSpec) -> Self {
        LoggingEngine {
            instrument,
            origin: Instant::now(),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn instrument(&self) -> &InstrumentSpec {
        &self.instrument
    }
}

impl Engine for LoggingEngine {
    fn current_time(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn schedule_note(&self, note: &str, start_time: f64, options: PlayOptions) -> Box<dyn NoteHandle> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        info!(
            id,
            note,
            start_time,
            gain = options.gain,
            duration = options.duration,
            "note scheduled"
        );
        Box::new(LoggingHandle {
            id,
            note: note.to_string(),
            stopped: AtomicBool::new(false),
        })
    }
}

pub struct LoggingHandle {
    id: u64,
    note: String,
    stopped: AtomicBool,
}

impl LoggingHandle {
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

impl NoteHandle for LoggingHandle {
    fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            debug!(id = self.id, note = %self.note, "note stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_loader_resolves_engine() {
        let loader = LoggingLoader::default();
        let engine = loader.load().await.unwrap();
        assert!(engine.current_time() >= 0.0);
    }

    #[test]
    fn test_logging_handle_stop_is_idempotent() {
        let handle = LoggingHandle {
            id: 0,
            note: "C4".to_string(),
            stopped: AtomicBool::new(false),
        };
        assert!(!handle.is_stopped());
        handle.stop();
        handle.stop();
        assert!(handle.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_follows_tokio_time() {
        let engine = LoggingEngine::new(InstrumentSpec::default());
        assert_eq!(engine.instrument().name, "acoustic_grand_piano");
        tokio::time::advance(std::time::Duration::from_millis(1500)).await;
        assert!((engine.current_time() - 1.5).abs() < 1e-6);
    }
}
