//! Theme system for the tabbed panels widget
//!
//! A theme supplies the tab label color, the color labels reset to, the
//! background of the widget box and its border style. Themes can be loaded
//! from TOML or constructed programmatically.

use crate::error::{CoreError, CoreResult};
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

/// Complete theme definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    /// Theme display name
    pub name: String,
    /// Color palette
    pub colors: ThemeColors,
    /// Border styling
    pub borders: BorderStyle,
}

/// Color palette for the theme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeColors {
    /// Background of the widget box
    #[serde(with = "color_serde")]
    pub background: Color,
    /// Text color tab labels reset to after the label
    #[serde(with = "color_serde")]
    pub foreground: Color,
    /// Tab label color
    #[serde(with = "color_serde")]
    pub accent: Color,
    /// Border color of the widget box
    #[serde(with = "color_serde")]
    pub border: Color,
}

/// Border style for the widget box
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Rounded corners (default)
    #[default]
    Rounded,
    /// Square corners
    Square,
    /// Double-line borders
    Double,
    /// No borders
    None,
}

impl BorderStyle {
    /// Returns the ratatui border type, or `None` when borders are off.
    #[must_use]
    pub fn border_type(self) -> Option<BorderType> {
        match self {
            BorderStyle::Rounded => Some(BorderType::Rounded),
            BorderStyle::Square => Some(BorderType::Plain),
            BorderStyle::Double => Some(BorderType::Double),
            BorderStyle::None => None,
        }
    }
}

/// Parses a color name as used in markup tags and theme files.
///
/// Accepts the ANSI names (`red`, `lightcyan`, ...), the `dark*` aliases
/// (`darkcyan` is plain ANSI cyan), `#rrggbb`, palette indices written as
/// `indexed:N` or just `N`, and `-` or `default` for the terminal default.
///
/// # Errors
///
/// Returns [`CoreError::InvalidColor`] for anything else.
///
/// # Example
///
/// ```
/// use tabbed_core::theme::parse_color;
/// use ratatui::style::Color;
///
/// assert_eq!(parse_color("darkcyan").ok(), Some(Color::Cyan));
/// assert_eq!(parse_color("#ff0000").ok(), Some(Color::Rgb(255, 0, 0)));
/// assert!(parse_color("not-a-color").is_err());
/// ```
pub fn parse_color(s: &str) -> CoreResult<Color> {
    let invalid = || CoreError::InvalidColor(s.to_string());
    match s.to_lowercase().as_str() {
        "-" | "default" | "reset" => Ok(Color::Reset),
        "black" => Ok(Color::Black),
        "red" | "darkred" | "maroon" => Ok(Color::Red),
        "green" | "darkgreen" => Ok(Color::Green),
        "yellow" | "darkyellow" | "olive" => Ok(Color::Yellow),
        "blue" | "darkblue" | "navy" => Ok(Color::Blue),
        "magenta" | "darkmagenta" | "purple" => Ok(Color::Magenta),
        "cyan" | "darkcyan" | "teal" => Ok(Color::Cyan),
        "gray" | "grey" | "silver" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" | "lime" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" | "fuchsia" => Ok(Color::LightMagenta),
        "lightcyan" | "aqua" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        s if s.starts_with('#') => {
            let hex = s.trim_start_matches('#');
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
            };
            Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
        s if s.starts_with("indexed:") => s
            .trim_start_matches("indexed:")
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| invalid()),
        s if s.bytes().all(|b| b.is_ascii_digit()) && !s.is_empty() => {
            s.parse::<u8>().map(Color::Indexed).map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

/// Returns the canonical name of a color, the inverse of [`parse_color`].
///
/// # Example
///
/// ```
/// use tabbed_core::theme::{color_name, parse_color};
/// use ratatui::style::Color;
///
/// assert_eq!(color_name(Color::Cyan), "cyan");
/// assert_eq!(color_name(Color::Rgb(1, 2, 3)), "#010203");
/// assert_eq!(parse_color(&color_name(Color::Indexed(7))).ok(), Some(Color::Indexed(7)));
/// ```
#[must_use]
pub fn color_name(color: Color) -> String {
    match color {
        Color::Reset => "-".to_string(),
        Color::Black => "black".to_string(),
        Color::Red => "red".to_string(),
        Color::Green => "green".to_string(),
        Color::Yellow => "yellow".to_string(),
        Color::Blue => "blue".to_string(),
        Color::Magenta => "magenta".to_string(),
        Color::Cyan => "cyan".to_string(),
        Color::Gray => "gray".to_string(),
        Color::DarkGray => "darkgray".to_string(),
        Color::LightRed => "lightred".to_string(),
        Color::LightGreen => "lightgreen".to_string(),
        Color::LightYellow => "lightyellow".to_string(),
        Color::LightBlue => "lightblue".to_string(),
        Color::LightMagenta => "lightmagenta".to_string(),
        Color::LightCyan => "lightcyan".to_string(),
        Color::White => "white".to_string(),
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        // Plain number so the name can sit inside a `fg:bg` markup tag.
        Color::Indexed(i) => i.to_string(),
    }
}

/// Custom serde module for ratatui Color
mod color_serde {
    use ratatui::style::Color;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::color_name(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_color(&s).map_err(serde::de::Error::custom)
    }
}

impl Theme {
    /// Plain terminal colors: dark cyan labels on the default background.
    pub fn terminal() -> Self {
        Theme {
            name: "Terminal".to_string(),
            colors: ThemeColors {
                background: Color::Reset,
                foreground: Color::White,
                accent: Color::Cyan,
                border: Color::Gray,
            },
            borders: BorderStyle::None,
        }
    }

    /// Creates a dark theme
    pub fn dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(30, 30, 46),    // Catppuccin base
                foreground: Color::Rgb(205, 214, 244), // Catppuccin text
                accent: Color::Rgb(137, 180, 250),     // Catppuccin blue
                border: Color::Rgb(88, 91, 112),       // Catppuccin surface2
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Creates a Nord theme
    pub fn nord() -> Self {
        Theme {
            name: "Nord".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(46, 52, 64),    // Nord polar night
                foreground: Color::Rgb(236, 239, 244), // Nord snow storm
                accent: Color::Rgb(136, 192, 208),     // Nord frost
                border: Color::Rgb(76, 86, 106),       // Nord polar night lightest
            },
            borders: BorderStyle::Square,
        }
    }

    /// Parses a theme from TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML string is malformed or contains invalid values.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes the theme to TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::terminal()
    }
}
