//! Configuration file support for pagemark.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pagemark/config.toml`. Settings include the initial tool and
//! color, stroke appearance, eraser radius, and the initial surface size.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, EraserConfig, StrokeStyleConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#ff0000"
/// default_tool = "pen"
///
/// [strokes]
/// pen_width = 3.0
/// highlighter_width = 10.0
/// highlighter_opacity = 0.3
///
/// [eraser]
/// radius = 10.0
///
/// [surface]
/// width = 800
/// height = 600
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial tool and color
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Stroke width and opacity per tool
    #[serde(default)]
    pub strokes: StrokeStyleConfig,

    /// Eraser hit radius
    #[serde(default)]
    pub eraser: EraserConfig,

    /// Initial surface size
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `strokes.pen_width`, `strokes.highlighter_width`: 0.5 - 50.0
    /// - `strokes.highlighter_opacity`: 0.05 - 1.0
    /// - `eraser.radius`: 1.0 - 100.0
    /// - `surface.width`, `surface.height`: 1 - 16384
    pub fn validate_and_clamp(&mut self) {
        clamp_f64("strokes.pen_width", &mut self.strokes.pen_width, 0.5, 50.0);
        clamp_f64(
            "strokes.highlighter_width",
            &mut self.strokes.highlighter_width,
            0.5,
            50.0,
        );
        clamp_f64(
            "strokes.highlighter_opacity",
            &mut self.strokes.highlighter_opacity,
            0.05,
            1.0,
        );
        clamp_f64("eraser.radius", &mut self.eraser.radius, 1.0, 100.0);

        for (name, value) in [
            ("surface.width", &mut self.surface.width),
            ("surface.height", &mut self.surface.height),
        ] {
            if !(1..=16384).contains(value) {
                log::warn!("Invalid {name} {value}, clamping to 1-16384 range");
                *value = (*value).clamp(1, 16384);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pagemark/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pagemark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it doesn't exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
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

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(value) {
        log::warn!("Invalid {name} {value:.2}, clamping to {min}-{max} range");
        *value = if value.is_nan() {
            min
        } else {
            value.clamp(min, max)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::input::Tool;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_overlay_behavior() {
        let config = Config::default();
        assert_eq!(config.drawing.default_color.to_color(), RED);
        assert_eq!(config.drawing.default_tool, Tool::Pen);
        assert_eq!(config.strokes.pen_width, 3.0);
        assert_eq!(config.strokes.highlighter_width, 10.0);
        assert_eq!(config.strokes.highlighter_opacity, 0.3);
        assert_eq!(config.eraser.radius, 10.0);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.surface.width, 800);
        assert_eq!(config.surface.height, 600);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[drawing]\ndefault_color = \"blue\"\ndefault_tool = \"highlighter\"\n\n[eraser]\nradius = 25.0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_color.to_color(), BLUE);
        assert_eq!(config.drawing.default_tool, Tool::Highlighter);
        assert_eq!(config.eraser.radius, 25.0);
        assert_eq!(config.strokes.pen_width, 3.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[strokes]\nhighlighter_opacity = 3.0\npen_width = 0.0\n\n[surface]\nwidth = 0\nheight = 99999\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.strokes.highlighter_opacity, 1.0);
        assert_eq!(config.strokes.pen_width, 0.5);
        assert_eq!(config.surface.width, 1);
        assert_eq!(config.surface.height, 16384);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[eraser\nradius = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("eraser"));
        assert!(schema.contains("highlighter_opacity"));
    }
}
