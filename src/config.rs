//! File configuration for interface consumers.
//!
//! Only generation parameters and display preferences live here.
//! Generated passwords are never written back. Loading only parses;
//! the generation section is validated once flags have been layered
//! on top of it.

use crate::display::ThemePreference;
use crate::generator::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML or has values of the wrong type.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Generation parameters, not yet validated.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Display preferences.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Stored theme choice.
    pub theme: ThemePreference,
    /// Width of the strength meter in cells.
    pub meter_width: usize,
    /// Emit ANSI colours.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Auto,
            meter_width: 32,
            color: true,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// Out-of-range values are accepted here and rejected by
    /// [`GenerationConfig::validate`] after overrides are applied.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharacterClass;
    use crate::generator::GenerationError;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            [generation]
            length = 24
            enabled = ["lowercase", "digit", "symbol"]
            avoid_ambiguous = false
            required = ["symbol"]
            custom_symbols = "-_."

            [display]
            theme = "dark"
            meter_width = 20
            color = false
        "#;

        let config = FileConfig::from_toml(text).unwrap();
        assert_eq!(config.generation.length, 24);
        assert!(config.generation.is_enabled(CharacterClass::Symbol));
        assert_eq!(config.generation.effective_required(), vec![CharacterClass::Symbol]);
        assert_eq!(config.generation.custom_symbols.as_deref(), Some("-_."));
        assert_eq!(config.display.theme, ThemePreference::Dark);
        assert_eq!(config.display.meter_width, 20);
        assert!(!config.display.color);
    }

    #[test]
    fn test_out_of_range_values_parse() {
        let config = FileConfig::from_toml("[generation]\nlength = 5000\nenabled = []").unwrap();
        assert_eq!(config.generation.length, 5000);
        assert!(config.generation.enabled.is_empty());
        assert!(matches!(
            config.generation.validate(),
            Err(GenerationError::InvalidLength { got: 5000 })
        ));
    }

    #[test]
    fn test_non_integer_length_rejected() {
        let result = FileConfig::from_toml("[generation]\nlength = 12.5");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_class_rejected() {
        let result = FileConfig::from_toml("[generation]\nenabled = [\"emoji\"]");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = FileConfig::from_file("/nonexistent/secure-passgen.toml");
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }
}
