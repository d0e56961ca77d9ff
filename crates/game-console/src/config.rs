//! Console configuration
//!
//! Loaded from `.game-console.toml` in the current directory or the home
//! directory. Every field has a default, so a partial file is fine.

use crate::error::ConsoleError;
use crate::model::{FontId, Rect, Rgba};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".game-console.toml";

/// Appearance and behaviour of a console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Scrollback capacity. Zero empties the console every tick.
    #[serde(default = "default_line_count")]
    pub line_count: usize,

    #[serde(default = "default_text_scale")]
    pub text_scale: f32,

    /// Background opacity within `[0, 1]`.
    #[serde(default = "default_alpha")]
    pub alpha: f32,

    /// Vertical pixel step between two lines.
    #[serde(default = "default_line_height")]
    pub line_height: f32,

    #[serde(default = "default_background_color")]
    pub background_color: Rgba,

    #[serde(default = "default_output_color")]
    pub output_color: Rgba,

    #[serde(default = "default_error_color")]
    pub error_color: Rgba,

    #[serde(default = "default_input_color")]
    pub input_color: Rgba,

    /// Colour old lines fade towards.
    #[serde(default)]
    pub fade_color: Rgba,

    /// Console rectangle. Anchored bottom-right of the viewport when unset.
    #[serde(default)]
    pub position: Option<Rect>,

    #[serde(default)]
    pub output_font: Option<FontId>,

    #[serde(default)]
    pub error_font: Option<FontId>,

    #[serde(default)]
    pub input_font: Option<FontId>,

    /// Level filter for [`ConsoleLogger`](crate::ConsoleLogger), e.g. "debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_line_count() -> usize {
    10
}

fn default_text_scale() -> f32 {
    0.5
}

fn default_alpha() -> f32 {
    0.5
}

fn default_line_height() -> f32 {
    20.0
}

fn default_background_color() -> Rgba {
    Rgba::BLACK
}

fn default_output_color() -> Rgba {
    Rgba::WHITE
}

fn default_error_color() -> Rgba {
    Rgba::RED
}

fn default_input_color() -> Rgba {
    Rgba::CYAN
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            line_count: default_line_count(),
            text_scale: default_text_scale(),
            alpha: default_alpha(),
            line_height: default_line_height(),
            background_color: default_background_color(),
            output_color: default_output_color(),
            error_color: default_error_color(),
            input_color: default_input_color(),
            fade_color: Rgba::TRANSPARENT,
            position: None,
            output_font: None,
            error_font: None,
            input_font: None,
            log_level: default_log_level(),
        }
    }
}

pub(crate) fn check_text_scale(scale: f32) -> Result<(), ConsoleError> {
    if !scale.is_finite() || scale < 0.0 {
        return Err(ConsoleError::invalid(
            "text_scale",
            format!("must be a finite number >= 0, got {scale}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_alpha(alpha: f32) -> Result<(), ConsoleError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ConsoleError::invalid(
            "alpha",
            format!("must be within 0 and 1, got {alpha}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_line_height(height: f32) -> Result<(), ConsoleError> {
    if !height.is_finite() || height <= 0.0 {
        return Err(ConsoleError::invalid(
            "line_height",
            format!("must be a finite number > 0, got {height}"),
        ));
    }
    Ok(())
}

impl ConsoleConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConsoleError> {
        let config: ConsoleConfig =
            toml::from_str(content).map_err(|e| ConsoleError::invalid("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value against its legal range.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        check_text_scale(self.text_scale)?;
        check_alpha(self.alpha)?;
        check_line_height(self.line_height)?;
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConsoleError> {
        self.log_level
            .parse()
            .map_err(|_| ConsoleError::invalid("log_level", format!("unknown level {:?}", self.log_level)))
    }

    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded console config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to load console config: {}", e);
                }
            }
        }

        log::debug!("Using default console config");
        Self::default()
    }
}

fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    let home_config = env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))?;
    let content = std::fs::read_to_string(&home_config).ok()?;
    log::debug!("Loaded config from {}", home_config.display());
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.line_count, 10);
        assert_eq!(config.text_scale, 0.5);
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.output_color, Rgba::WHITE);
        assert_eq!(config.error_color, Rgba::RED);
        assert_eq!(config.input_color, Rgba::CYAN);
        assert_eq!(config.fade_color, Rgba::TRANSPARENT);
        assert_eq!(config.position, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r##"
            line_count = 3
            error_color = "#FF8800"
            input_font = 2

            [position]
            x = 10
            y = 20
            width = 300
            height = 60
        "##;
        let config = ConsoleConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.line_count, 3);
        assert_eq!(config.error_color, Rgba::rgb(0xFF, 0x88, 0x00));
        assert_eq!(config.input_font, Some(FontId(2)));
        assert_eq!(config.position, Some(Rect::new(10, 20, 300, 60)));
        // untouched fields keep their defaults
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_negative_line_count_rejected() {
        let err = ConsoleConfig::from_toml_str("line_count = -1").unwrap_err();
        assert!(matches!(
            err,
            ConsoleError::InvalidConfiguration { field: "config", .. }
        ));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = ConsoleConfig::from_toml_str("output_color = \"white\"").unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_validate_ranges() {
        let mut config = ConsoleConfig {
            alpha: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConsoleError::InvalidConfiguration { field: "alpha", .. })
        ));

        config.alpha = 1.0;
        config.text_scale = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConsoleError::InvalidConfiguration { field: "text_scale", .. })
        ));

        config.text_scale = 0.0;
        config.line_height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConsoleError::InvalidConfiguration { field: "line_height", .. })
        ));

        config.line_height = 12.0;
        config.log_level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConsoleError::InvalidConfiguration { field: "log_level", .. })
        ));
    }

    #[test]
    fn test_level_filter() {
        let config = ConsoleConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }
}
