//! # Configuration
//!
//! Trainer settings read from a YAML document. Every key is optional:
//!
//! ```yaml
//! root-low: 45        # lowest root (MIDI), A2
//! root-span: 8        # number of roots to draw from
//! duration: 3.0       # seconds each play request sounds
//! gain: 0.9
//! instrument: acoustic_grand_piano
//! soundfont: FluidR3_GM
//! format: mp3         # mp3 | ogg
//! ```
//!
//! The document is first read into [`RawConfig`] and then checked into a
//! [`TrainerConfig`], so that out-of-range values surface as
//! [`TrainerError::ConfigError`] instead of odd playback later on.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::chord::RootWindow;
use crate::error::TrainerError;
use crate::playback::{InstrumentSpec, SampleFormat};

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub root_low: Option<u8>,
    pub root_span: Option<u8>,
    pub duration: Option<f64>,
    pub gain: Option<f64>,
    pub instrument: Option<String>,
    pub soundfont: Option<String>,
    pub format: Option<SampleFormat>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    pub root_window: RootWindow,
    /// How long a play request sounds when no duration is given
    pub duration: Duration,
    pub gain: f64,
    pub instrument: InstrumentSpec,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            root_window: RootWindow::default(),
            duration: Duration::from_secs(3),
            gain: 0.9,
            instrument: InstrumentSpec::default(),
        }
    }
}

impl TrainerConfig {
    /// Parse and validate a YAML configuration document.
    ///
    /// # Examples
    /// ```
    /// use chord_trainer::TrainerConfig;
    ///
    /// let config = TrainerConfig::from_yaml("root-low: 48\nduration: 1.5\n").unwrap();
    /// assert_eq!(config.root_window.low(), 48);
    /// assert_eq!(config.root_window.span(), 8);
    /// assert_eq!(config.duration.as_millis(), 1500);
    /// ```
    pub fn from_yaml(content: &str) -> Result<TrainerConfig, TrainerError> {
        let raw: RawConfig = if content.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| TrainerError::ConfigError(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    pub fn load(path: &Path) -> Result<TrainerConfig, TrainerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrainerError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_raw(raw: RawConfig) -> Result<TrainerConfig, TrainerError> {
        let defaults = TrainerConfig::default();

        let root_window = RootWindow::new(
            raw.root_low.unwrap_or(defaults.root_window.low()),
            raw.root_span.unwrap_or(defaults.root_window.span()),
        )?;

        let duration = match raw.duration {
            Some(secs) if secs.is_finite() && secs > 0.0 => Duration::try_from_secs_f64(secs)
                .map_err(|e| {
                    TrainerError::ConfigError(format!("duration {} is out of range: {}", secs, e))
                })?,
            Some(secs) => {
                return Err(TrainerError::ConfigError(format!(
                    "duration must be a positive number of seconds, got {}",
                    secs
                )))
            }
            None => defaults.duration,
        };

        let gain = raw.gain.unwrap_or(defaults.gain);
        if !(0.0..=1.0).contains(&gain) {
            return Err(TrainerError::ConfigError(format!(
                "gain must be between 0 and 1, got {}",
                gain
            )));
        }

        let name = non_empty("instrument", raw.instrument, defaults.instrument.name)?;
        let soundfont = non_empty("soundfont", raw.soundfont, defaults.instrument.soundfont)?;

        Ok(TrainerConfig {
            root_window,
            duration,
            gain,
            instrument: InstrumentSpec {
                name,
                soundfont,
                format: raw.format.unwrap_or(defaults.instrument.format),
            },
        })
    }
}

fn non_empty(key: &str, value: Option<String>, default: String) -> Result<String, TrainerError> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(TrainerError::ConfigError(format!("{} must not be empty", key)))
        }
        Some(v) => Ok(v),
        None => Ok(default),
    }
}
