//! # tabbed-core
//!
//! Core traits and types for the tabbed panels TUI widget.
//!
//! ## Overview
//!
//! A tabbed panels widget multiplexes several child views behind a tab
//! strip. This crate holds the pieces that widget is built from without
//! committing to any concrete implementation:
//!
//! - [`Primitive`] - The draw/input/focus surface every widget implements
//! - [`FocusController`] - Moves input focus between widgets
//! - [`PanelStack`], [`TabStrip`], [`FlexLayout`] - The collaborators the
//!   coordinator drives
//! - [`HighlightListener`] - Observer for tab strip highlight changes
//! - [`Theme`] - Colors and border style
//! - [`TabbedConfig`] - File-backed configuration
//! - [`CoreError`] - Error types for configuration handling
//!
//! ## Example
//!
//! ```
//! use tabbed_core::{SwitcherPosition, TabbedConfig, Theme};
//!
//! let config = TabbedConfig::from_toml(r#"switcher = "bottom""#).unwrap();
//! assert_eq!(config.switcher, SwitcherPosition::Bottom);
//! assert_eq!(config.theme, Theme::terminal());
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod primitive;
pub mod theme;

pub use config::{SwitcherPosition, TabbedConfig};
pub use container::{FlexLayout, HighlightListener, PanelStack, TabStrip};
pub use error::{CoreError, CoreResult};
pub use primitive::{same_primitive, FocusController, Primitive, PrimitiveRef};
pub use theme::{BorderStyle, Theme, ThemeColors};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _ = TabbedConfig::default();
        let _ = SwitcherPosition::Top;
        let _ = BorderStyle::Rounded;
        let _ = CoreError::NoConfigDir;
    }

    #[test]
    fn test_core_result_usage() {
        fn example_function() -> CoreResult<u32> {
            Ok(42)
        }

        fn failing_function() -> CoreResult<u32> {
            Err(CoreError::InvalidColor("nope".to_string()))
        }

        assert_eq!(example_function().ok(), Some(42));
        assert!(failing_function().is_err());
    }
}
