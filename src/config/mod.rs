//! Configuration file support for hudpad.
//!
//! Consumers normally build a [`PadConfig`] in code and hand it to
//! `GamePad::setup`, but the same structure can be loaded from
//! `~/.config/hudpad/config.toml`. All values are validated and clamped to
//! acceptable ranges on load; if no config file exists, defaults are used.

pub mod types;

// Re-export commonly used types at module level
pub use types::{BridgeConfig, ButtonSpec, ColorSpec, DisplayConfig, PadConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PadError;

/// Maximum number of round buttons a pad can carry.
pub const MAX_BUTTONS: usize = 4;

impl PadConfig {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged:
    /// - `buttons`: at most [`MAX_BUTTONS`] entries, extras silently dropped
    ///   (with a warning) to match the preset table
    /// - `bridge.repeat_delay_ms`: 50 - 2000
    /// - `bridge.repeat_rate_ms`: 16 - 1000
    pub fn validate_and_clamp(&mut self) {
        if self.buttons.len() > MAX_BUTTONS {
            log::warn!(
                "{} buttons configured, clamping to the {}-button preset",
                self.buttons.len(),
                MAX_BUTTONS
            );
            self.buttons.truncate(MAX_BUTTONS);
        }

        if !(50..=2000).contains(&self.bridge.repeat_delay_ms) {
            log::warn!(
                "Invalid repeat_delay_ms {}, clamping to 50-2000 range",
                self.bridge.repeat_delay_ms
            );
            self.bridge.repeat_delay_ms = self.bridge.repeat_delay_ms.clamp(50, 2000);
        }

        if !(16..=1000).contains(&self.bridge.repeat_rate_ms) {
            log::warn!(
                "Invalid repeat_rate_ms {}, clamping to 16-1000 range",
                self.bridge.repeat_rate_ms
            );
            self.bridge.repeat_rate_ms = self.bridge.repeat_rate_ms.clamp(16, 1000);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g. HOME not set).
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("hudpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default file, or returns defaults if
    /// not found.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads the default config file, falling back to defaults on failure.
    ///
    /// Load failures are non-fatal here: they surface as a logged
    /// [`PadError::ResourceLoad`] and the defaults are used, so a broken
    /// config file degrades the pad instead of preventing setup.
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_or_default_from(&path),
            _ => Self::default(),
        }
    }

    /// Same fallback behavior as [`PadConfig::load_or_default`], for an
    /// explicit path.
    pub fn load_or_default_from(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                let err = PadError::ResourceLoad(format!("{err:#}"));
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: PadConfig = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to an explicit path, creating the
    /// parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Corner;

    #[test]
    fn defaults_are_four_buttons_start_and_stick() {
        let config = PadConfig::default();
        assert_eq!(config.layout, Corner::BottomRight);
        assert!(config.joystick);
        assert!(config.start);
        assert!(!config.select);
        assert!(config.buttons.is_empty());
        assert!(!config.bridge.enabled);
        assert_eq!(config.bridge.repeat_delay_ms, 300);
        assert_eq!(config.bridge.repeat_rate_ms, 50);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: PadConfig = toml::from_str(
            r#"
            layout = "top-left"
            select = true

            [[buttons]]
            name = "jump"
            color = "cyan"
            key = "s"

            [[buttons]]
            color = [255, 128, 0]
            "#,
        )
        .unwrap();

        assert_eq!(config.layout, Corner::TopLeft);
        assert!(config.select);
        assert!(config.joystick, "joystick defaults on");
        assert_eq!(config.buttons.len(), 2);
        assert_eq!(config.buttons[0].name.as_deref(), Some("jump"));
        assert_eq!(config.buttons[0].key.as_deref(), Some("s"));
        assert_eq!(
            config.buttons[1].color,
            Some(ColorSpec::Rgb([255, 128, 0]))
        );
    }

    #[test]
    fn clamp_drops_extra_buttons_and_fixes_timings() {
        let mut config = PadConfig {
            buttons: vec![ButtonSpec::default(); 7],
            ..Default::default()
        };
        config.bridge.repeat_delay_ms = 5;
        config.bridge.repeat_rate_ms = 10_000;

        config.validate_and_clamp();

        assert_eq!(config.buttons.len(), MAX_BUTTONS);
        assert_eq!(config.bridge.repeat_delay_ms, 50);
        assert_eq!(config.bridge.repeat_rate_ms, 1000);
    }

    #[test]
    fn broken_config_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "layout = \"nowhere\"").unwrap();

        assert!(PadConfig::load_from(&path).is_err());
        assert_eq!(PadConfig::load_or_default_from(&path), PadConfig::default());
    }

    #[test]
    fn file_round_trip_preserves_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = PadConfig::default();
        config.layout = Corner::BottomLeft;
        config.buttons.push(ButtonSpec {
            name: Some("fire".to_string()),
            color: Some(ColorSpec::Name("yellow".to_string())),
            key: Some("f".to_string()),
        });

        config.save_to(&path).unwrap();
        let loaded = PadConfig::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
