//! # Error Types
//!
//! This module defines all error types for the chord trainer.
//!
//! ## Error Types
//! - `NoChordReady` - An action needed a current chord but none was generated yet
//! - `UnknownChordType` - A guess named an identifier outside the chord palette
//! - `UnknownVoiceRole` - A role name outside chord/soprano/alto/tenor/bass
//! - `EngineAcquisitionFailed` - The instrument backend could not be loaded
//! - `ConfigError` - Invalid YAML configuration
//!
//! Only `NoChordReady` is something a user is expected to hit. The others point
//! at a broken integration or a broken environment.
//!
//! ## Usage
//! ```rust
//! use chord_trainer::{Session, TrainerError};
//!
//! let session = Session::new(Default::default(), chord_trainer::LoggingLoader::default());
//! match session.submit_guess("Moll") {
//!     Ok(outcome) => println!("{}", outcome),
//!     Err(TrainerError::NoChordReady) => eprintln!("Generate a chord first."),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainerError {
    /// No chord has been generated yet.
    ///
    /// # Example
    /// ```
    /// # use chord_trainer::TrainerError;
    /// let err = TrainerError::NoChordReady;
    /// assert_eq!(err.to_string(), "No chord ready: generate a new chord first");
    /// ```
    #[error("No chord ready: generate a new chord first")]
    NoChordReady,

    /// The guessed identifier is not one of the nine chord types.
    ///
    /// # Example
    /// ```
    /// # use chord_trainer::TrainerError;
    /// let err = TrainerError::UnknownChordType("Sus4".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord type: Sus4");
    /// ```
    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    #[error("Unknown voice role: {0}")]
    UnknownVoiceRole(String),

    /// The instrument backend failed to load.
    ///
    /// The failure is cached together with the engine cell, so every later
    /// playback request reports the same reason.
    #[error("Engine acquisition failed: {0}")]
    EngineAcquisitionFailed(String),

    /// Invalid configuration value or malformed YAML.
    ///
    /// # Example
    /// ```
    /// # use chord_trainer::TrainerError;
    /// let err = TrainerError::ConfigError("root-span must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: root-span must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
