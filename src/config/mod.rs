//! Configuration file support.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkboard/config.toml`. Settings
//! cover the drawing defaults a canvas session starts with: colors, fill
//! status, stroke width, and the initially selected tool.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::DrawingConfig;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::ToolKind;

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have sensible defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// stroke_color = "black"
/// fill_color = [0, 128, 255]
/// fill_enabled = false
/// stroke_width = 3
/// default_tool = "line"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing defaults (colors, fill, width, tool)
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Ensures user-provided values won't put the canvas in an invalid
    /// state. Out-of-range values are clamped to the nearest valid value and
    /// a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 0 - 48 (0 is the no-draw state)
    /// - `default_tool`: one of the recognized tool names
    fn validate_and_clamp(&mut self) {
        // Stroke width: 0 - 48
        if !(0..=48).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {}, clamping to 0-48 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(0, 48);
        }

        // Tool name must be recognized
        if ToolKind::from_name(&self.drawing.default_tool).is_none() {
            log::warn!(
                "Invalid default_tool '{}', falling back to 'line'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "line".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file is not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Missing files yield defaults; all loaded values are validated and
    /// clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {config:?}");

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Serializes the config to TOML and writes it to
    /// `~/.config/inkboard/config.toml`, creating the parent directory if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the current configuration to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}
