//! Widget configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use crate::audio::{AudioOutput, ToneSpec, VictoryChime};
use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Audio settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Whether the victory chime is subscribed at all.
    enabled: bool,
    /// Where the chime is played.
    output: AudioOutput,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output: AudioOutput::default(),
        }
    }
}

/// Top-level widget configuration.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Victory tone parameters.
    tone: ToneSpec,
    /// Audio output settings.
    audio: AudioConfig,
}

impl WidgetConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.tone.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(output = ?config.audio.output, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Builds the victory chime, or `None` when audio is disabled.
    #[instrument(skip(self))]
    pub fn victory_chime(&self) -> Option<VictoryChime> {
        self.audio
            .enabled
            .then(|| VictoryChime::new(self.tone.clone(), self.audio.output.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WidgetConfig::from_toml("").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert!(*config.audio().enabled());
        assert_eq!(config.audio().output(), &AudioOutput::Speaker);
        assert_eq!(*config.tone().frequency_hz(), 440.0);
    }

    #[test]
    fn test_partial_tone_override() {
        let config = WidgetConfig::from_toml(
            r#"
            [tone]
            frequency_hz = 880.0
            "#,
        )
        .unwrap();
        assert_eq!(*config.tone().frequency_hz(), 880.0);
        assert_eq!(*config.tone().duration_ms(), 500);
    }

    #[test]
    fn test_audio_outputs() {
        let silent = WidgetConfig::from_toml("[audio]\noutput = \"none\"").unwrap();
        assert_eq!(silent.audio().output(), &AudioOutput::Silent);

        let wav = WidgetConfig::from_toml("[audio]\noutput = { wav = \"out.wav\" }").unwrap();
        assert_eq!(wav.audio().output(), &AudioOutput::Wav("out.wav".into()));

        let disabled = WidgetConfig::from_toml("[audio]\nenabled = false").unwrap();
        assert!(disabled.victory_chime().is_none());
    }

    #[test]
    fn test_invalid_tone_rejected() {
        let err = WidgetConfig::from_toml("[tone]\nfade_in_ms = 1000").unwrap_err();
        assert!(err.message.contains("fade-in"));
    }

    #[test]
    fn test_oversized_sample_rate_rejected() {
        let err = WidgetConfig::from_toml("[tone]\nsample_rate = 3000000000").unwrap_err();
        assert!(err.message.contains("exceeds"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = WidgetConfig::from_toml("[tone\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tone]\nsample_rate = 8000").unwrap();

        let config = WidgetConfig::load(Some(file.path())).unwrap();
        assert_eq!(*config.tone().sample_rate(), 8000);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WidgetConfig::from_file(dir.path().join("absent.toml")).is_err());
    }
}
