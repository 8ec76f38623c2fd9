//! Configuration management for limbo.
//!
//! This holds the shell's own tuning knobs (simulated transition delays,
//! the demo transcript, the displayed hotkey). It is not the settings
//! page's user state, which stays in memory only.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::APP_NAME;

/// Transcript shown by the simulated transcription when none is configured.
pub const DEMO_TRANSCRIPT: &str = "Hello, this is a beautiful dictation demo!";

/// Hotkey label shown on the dashboard and settings page. Display only;
/// the global hook is not part of this shell.
pub const DEFAULT_HOTKEY: &str = "Alt+Space";

/// Shell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Hotkey label shown in the dashboard and settings views
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,

    /// Transcript text produced by the simulated transcription
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_transcript: Option<String>,

    /// Seconds the simulated transcription runs before reporting success
    #[serde(
        default = "default_finish_delay",
        skip_serializing_if = "is_default_finish_delay"
    )]
    pub finish_delay: f32,

    /// Seconds a transcript stays on screen before the overlay dismisses
    #[serde(
        default = "default_dismiss_delay",
        skip_serializing_if = "is_default_dismiss_delay"
    )]
    pub dismiss_delay: f32,

    /// Seconds the hearing indicator lingers after recording stops
    #[serde(
        default = "default_hearing_grace",
        skip_serializing_if = "is_default_hearing_grace"
    )]
    pub hearing_grace: f32,
}

fn default_finish_delay() -> f32 {
    1.5
}

fn is_default_finish_delay(v: &f32) -> bool {
    (*v - default_finish_delay()).abs() < f32::EPSILON
}

fn default_dismiss_delay() -> f32 {
    3.0
}

fn is_default_dismiss_delay(v: &f32) -> bool {
    (*v - default_dismiss_delay()).abs() < f32::EPSILON
}

fn default_hearing_grace() -> f32 {
    2.0
}

fn is_default_hearing_grace(v: &f32) -> bool {
    (*v - default_hearing_grace()).abs() < f32::EPSILON
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: None,
            demo_transcript: None,
            finish_delay: default_finish_delay(),
            dismiss_delay: default_dismiss_delay(),
            hearing_grace: default_hearing_grace(),
        }
    }
}

impl Config {
    /// Get the hotkey label to display.
    pub fn hotkey(&self) -> &str {
        self.hotkey.as_deref().unwrap_or(DEFAULT_HOTKEY)
    }

    /// Get the transcript the simulated transcription produces.
    pub fn demo_transcript(&self) -> &str {
        self.demo_transcript.as_deref().unwrap_or(DEMO_TRANSCRIPT)
    }

    /// Get the transcribing-to-success delay as a Duration.
    pub fn finish_delay(&self) -> Duration {
        Duration::from_secs_f32(self.finish_delay)
    }

    /// Get the success-to-idle delay as a Duration.
    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_secs_f32(self.dismiss_delay)
    }

    /// Get the hearing indicator grace period as a Duration.
    pub fn hearing_grace(&self) -> Duration {
        Duration::from_secs_f32(self.hearing_grace)
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager with the default configuration directory.
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Ok(Self { config_path })
    }

    /// Creates a new ConfigManager with a specified configuration directory.
    #[cfg(test)]
    pub fn with_config_dir<P: AsRef<std::path::Path>>(dir: P) -> Self {
        let config_path = dir.as_ref().join(format!("{}.toml", APP_NAME));
        Self { config_path }
    }

    /// Returns the default path to the configuration file.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = config_dir().context("Failed to retrieve configuration directory")?;
        Ok(config_dir
            .join(APP_NAME)
            .join(format!("{}.toml", APP_NAME)))
    }

    /// Loads the configuration from the config file or returns default.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let config_content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file at {:?}", self.config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file at {:?}", self.config_path))?;

        debug!(path = ?self.config_path, "configuration loaded");

        Ok(config)
    }

    /// Saves the configuration to the config file.
    pub fn save(&self, config: &Config) -> Result<()> {
        let config_dir = self
            .config_path
            .parent()
            .with_context(|| format!("Failed to get parent directory of {:?}", self.config_path))?;

        fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config directory at {:?}", config_dir))?;

        let serialized =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;

        fs::write(&self.config_path, serialized)
            .with_context(|| format!("Failed to write config file at {:?}", self.config_path))?;

        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &std::path::Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.hotkey.is_none());
        assert_eq!(config.hotkey(), DEFAULT_HOTKEY);
        assert_eq!(config.demo_transcript(), DEMO_TRANSCRIPT);
        assert_eq!(config.finish_delay(), Duration::from_millis(1500));
        assert_eq!(config.dismiss_delay(), Duration::from_secs(3));
        assert_eq!(config.hearing_grace(), Duration::from_secs(2));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            hotkey: Some("F9".to_string()),
            demo_transcript: Some("testing one two".to_string()),
            dismiss_delay: 5.0,
            ..Default::default()
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.hotkey, deserialized.hotkey);
        assert_eq!(config.demo_transcript, deserialized.demo_transcript);
        assert_eq!(config.dismiss_delay, deserialized.dismiss_delay);
        // defaults are not written out
        assert!(!serialized.contains("finish_delay"));
    }

    #[test]
    fn test_config_manager_save_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let manager = ConfigManager::with_config_dir(temp_dir.path());

        let config = Config {
            hotkey: Some("Ctrl+Shift+V".to_string()),
            ..Default::default()
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(config.hotkey, loaded.hotkey);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_config_dir(temp_dir.path());

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.hotkey(), DEFAULT_HOTKEY);
    }
}
