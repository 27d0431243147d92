//! Settings for the terminal app.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::DEFAULT_AI_LABEL;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// App settings, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Milliseconds the computer waits before answering.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Name shown for the computer opponent.
    #[serde(default = "default_ai_label")]
    ai_label: String,

    /// Seed for the computer's choices; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_ai_delay_ms() -> u64 {
    800
}

fn default_ai_label() -> String {
    DEFAULT_AI_LABEL.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_delay_ms: default_ai_delay_ms(),
            ai_label: default_ai_label(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(ai_delay_ms = settings.ai_delay_ms, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or the defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        ai_delay_ms: Option<u64>,
        seed: Option<u64>,
        ai_label: Option<String>,
    ) -> Self {
        if let Some(ms) = ai_delay_ms {
            self.ai_delay_ms = ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(label) = ai_label {
            self.ai_label = label;
        }
        self
    }

    /// The computer's answer delay.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_values() {
        let settings = Settings::default().with_overrides(Some(0), None, Some("Robot".into()));
        assert_eq!(*settings.ai_delay_ms(), 0);
        assert_eq!(settings.ai_label(), "Robot");
        assert_eq!(*settings.seed(), None);
        assert_eq!(settings.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_error_records_caller() {
        let err = ConfigError::new("boom".into());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
