//! Configuration file support for cutmark.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/cutmark/config.toml`. Settings
//! cover the paint style applied to the drawing surface, shape completion
//! policy, and arrowhead appearance.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, LineCap, LineJoin};
pub use types::{ArrowConfig, PaintConfig, ShapeConfig};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::draw::PaintStyle;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [paint]
/// line_width = 1.0
/// stroke_color = "red"
/// fill_color = "red"
/// line_join = "round"
/// line_cap = "round"
///
/// [shape]
/// polygon_vertices = 4
///
/// [arrow]
/// length = 20.0
/// angle_degrees = 30.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Paint style applied to the surface at attach time
    #[serde(default)]
    pub paint: PaintConfig,

    /// Shape completion policy
    #[serde(default)]
    pub shape: ShapeConfig,

    /// Arrow appearance settings
    #[serde(default)]
    pub arrow: ArrowConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `paint.line_width`: 1.0 - 20.0
    /// - `shape.polygon_vertices`: 3 - 64
    /// - `arrow.length`: 5.0 - 50.0
    /// - `arrow.angle_degrees`: 15.0 - 60.0
    fn validate_and_clamp(&mut self) {
        // Line width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.paint.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 1.0-20.0 range",
                self.paint.line_width
            );
            self.paint.line_width = self.paint.line_width.clamp(1.0, 20.0);
        }

        // Polygon vertex target: 3 - 64
        if !(3..=64).contains(&self.shape.polygon_vertices) {
            log::warn!(
                "Invalid polygon_vertices {}, clamping to 3-64 range",
                self.shape.polygon_vertices
            );
            self.shape.polygon_vertices = self.shape.polygon_vertices.clamp(3, 64);
        }

        // Arrow length: 5.0 - 50.0
        if !(5.0..=50.0).contains(&self.arrow.length) {
            log::warn!(
                "Invalid arrow length {:.1}, clamping to 5.0-50.0 range",
                self.arrow.length
            );
            self.arrow.length = self.arrow.length.clamp(5.0, 50.0);
        }

        // Arrow angle: 15.0 - 60.0 degrees
        if !(15.0..=60.0).contains(&self.arrow.angle_degrees) {
            log::warn!(
                "Invalid arrow angle {:.1}°, clamping to 15.0-60.0° range",
                self.arrow.angle_degrees
            );
            self.arrow.angle_degrees = self.arrow.angle_degrees.clamp(15.0, 60.0);
        }
    }

    /// Resolves the paint configuration into a ready-to-apply style.
    pub fn paint_style(&self) -> PaintStyle {
        PaintStyle {
            line_width: self.paint.line_width,
            stroke: self.paint.stroke_color.to_color(),
            fill: self.paint.fill_color.to_color(),
            line_join: self.paint.line_join,
            line_cap: self.paint.line_cap,
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/cutmark/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("cutmark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from a specific path.
    ///
    /// If the file doesn't exist, returns a Config with default values. All
    /// loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
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

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default path.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to a specific path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.paint.line_width, 1.0);
        assert_eq!(config.shape.polygon_vertices, 4);
        assert_eq!(config.arrow.length, 20.0);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[shape]\npolygon_vertices = 6\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.shape.polygon_vertices, 6);
        assert_eq!(config.paint.line_width, 1.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[paint]\nline_width = 0.2\n\n[shape]\npolygon_vertices = 99\n\n[arrow]\nlength = 500.0\nangle_degrees = 5.0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.paint.line_width, 1.0);
        assert_eq!(config.shape.polygon_vertices, 64);
        assert_eq!(config.arrow.length, 50.0);
        assert_eq!(config.arrow.angle_degrees, 15.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[paint\nline_width = 1.0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_reload_round_trips() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.shape.polygon_vertices = 5;
        config.paint.stroke_color = ColorSpec::Rgb([0, 128, 255]);
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.shape.polygon_vertices, 5);
        let stroke = reloaded.paint_style().stroke;
        assert_eq!(stroke.r, 0.0);
        assert!((stroke.b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn paint_style_resolves_named_colors() {
        let style = Config::default().paint_style();
        assert_eq!(style.stroke, crate::draw::color::RED);
        assert_eq!(style.fill, crate::draw::color::RED);
        assert_eq!(style.line_join, LineJoin::Round);
        assert_eq!(style.line_cap, LineCap::Round);
    }
}
