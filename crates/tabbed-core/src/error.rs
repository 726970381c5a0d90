//! Core error types for tabbed-core
//!
//! The widget operations themselves are total and never fail. Errors only
//! arise from the ambient work around them: reading configuration files and
//! parsing theme colors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying IO error bubbled up from filesystem operations.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed.
    #[error("invalid configuration at {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration could not be serialized back to TOML.
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No platform configuration directory could be determined.
    #[error("no configuration directory available")]
    NoConfigDir,

    /// A color name or hex value was not recognised.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = CoreError::InvalidColor("chartreuse-ish".to_string());
        assert_eq!(err.to_string(), "invalid color: chartreuse-ish");
    }

    #[test]
    fn test_no_config_dir_display() {
        assert_eq!(
            CoreError::NoConfigDir.to_string(),
            "no configuration directory available"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: CoreError = io_err.into();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_config_parse_display_includes_path() {
        let source = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err = CoreError::ConfigParse {
            path: PathBuf::from("/tmp/config.toml"),
            source,
        };
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
