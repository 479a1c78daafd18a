//! Core error types for tomatimer-core.
//!
//! The timer state machine itself never fails; errors only come from the
//! edges: configuration storage, parsing user input, and cue playback.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tomatimer-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the configuration directory
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Mode identifier outside the three known modes
    #[error("unknown mode '{0}' (expected focus, shortBreak or longBreak)")]
    UnknownMode(String),
}

/// Cue playback failures.
///
/// Callers normally route these through [`crate::audio::play_cue`], which
/// logs and discards them.
#[derive(Error, Debug)]
pub enum AudioError {
    /// No output device (terminal closed, no notification daemon, ...)
    #[error("audio output unavailable: {0}")]
    Unavailable(String),

    /// The host refused to play the cue
    #[error("playback rejected: {0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_mode(s: &str) -> Result<crate::Mode> {
        Ok(s.parse::<crate::Mode>()?)
    }

    #[test]
    fn validation_errors_convert_into_core_error() {
        let err = parse_mode("siesta").unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::UnknownMode(_))));
        assert!(err.to_string().contains("siesta"));
    }

    #[test]
    fn config_error_messages_name_the_key() {
        let err: CoreError = ConfigError::UnknownKey("ui.colour".into()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown config key: ui.colour"
        );
    }
}
