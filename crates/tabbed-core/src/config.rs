//! Configuration for the tabbed panels widget.
//!
//! Settings live in `<config_dir>/tabbed-panels/config.toml`. A missing file
//! is not an error; the defaults apply.

use crate::error::{CoreError, CoreResult};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the tab switcher sits relative to the panels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SwitcherPosition {
    /// Tab strip above the panels (default)
    #[default]
    Top,
    /// Tab strip below the panels
    Bottom,
}

impl SwitcherPosition {
    /// Returns true for [`SwitcherPosition::Bottom`].
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(self, SwitcherPosition::Bottom)
    }
}

/// Widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TabbedConfig {
    /// Position of the tab switcher
    #[serde(default)]
    pub switcher: SwitcherPosition,
    /// Draw a border around the widget
    #[serde(default)]
    pub border: bool,
    /// Title shown in the border, if any
    #[serde(default)]
    pub title: Option<String>,
    /// Colors and border style
    #[serde(default)]
    pub theme: Theme,
}

impl TabbedConfig {
    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the platform has no configuration directory.
    pub fn load() -> CoreResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, using defaults if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or contains invalid values.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes the configuration to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Returns the default configuration file path.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoConfigDir`] if the platform has none.
    pub fn config_path() -> CoreResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(CoreError::NoConfigDir)?;
        Ok(config_dir.join("tabbed-panels").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TabbedConfig::default();
        assert_eq!(config.switcher, SwitcherPosition::Top);
        assert!(!config.border);
        assert!(config.title.is_none());
        assert_eq!(config.theme, Theme::terminal());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = TabbedConfig::from_toml(r#"switcher = "bottom""#).expect("should parse");
        assert!(config.switcher.is_bottom());
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r##"
            switcher = "top"
            border = true
            title = "Logs"

            [theme]
            name = "Custom"
            borders = "square"

            [theme.colors]
            background = "black"
            foreground = "white"
            accent = "#00afaf"
            border = "gray"
        "##;
        let config = TabbedConfig::from_toml(toml_str).expect("should parse");
        assert!(config.border);
        assert_eq!(config.title.as_deref(), Some("Logs"));
        assert_eq!(config.theme.colors.accent, Color::Rgb(0, 175, 175));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = TempDir::new().expect("temp dir");
        let config =
            TabbedConfig::load_from(&dir.path().join("absent.toml")).expect("defaults expected");
        assert_eq!(config, TabbedConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");
        let config = TabbedConfig {
            switcher: SwitcherPosition::Bottom,
            border: true,
            title: Some("Panels".to_string()),
            theme: Theme::nord(),
        };
        config.save_to(&path).expect("save should work");

        let loaded = TabbedConfig::load_from(&path).expect("load should work");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "switcher = sideways").expect("write");

        let err = TabbedConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
