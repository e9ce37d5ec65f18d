//! Centralized error types for tagpick.
//!
//! A single error hierarchy built on `thiserror`, with a user-facing
//! message projection for anything that surfaces outside the log file.

use thiserror::Error;

use crate::config::ConfigError;
use crate::source::SourceError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Item source errors.
    #[error("{0}")]
    Source(#[from] SourceError),

    /// IO errors (file system, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or teardown errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    ///
    /// Suitable for printing to stderr after the terminal has been restored,
    /// without internal detail.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::CreateDirError(_) => {
                    "Could not create configuration directory. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable.".to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
            },
            AppError::Source(e) => match e {
                SourceError::ReadError(_) => {
                    "Could not read the items file. Please check the path.".to_string()
                }
                SourceError::ParseError(_) => {
                    "The items file is not valid JSON. Expected an array of {id, label} objects."
                        .to_string()
                }
                SourceError::EmptyId(label) => {
                    format!("Item '{}' has an empty id.", label)
                }
            },
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::NoConfigDir;
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_app_error_from_source_error() {
        let source_err = SourceError::EmptyId("Nameless".to_string());
        let app_err: AppError = source_err.into();
        assert!(matches!(app_err, AppError::Source(SourceError::EmptyId(_))));
    }

    #[test]
    fn test_user_message_invalid_items() {
        let json_err = serde_json::from_str::<Vec<i32>>("oops").unwrap_err();
        let err = AppError::Source(SourceError::ParseError(json_err));
        assert!(err.user_message().contains("not valid JSON"));
    }

    #[test]
    fn test_user_message_empty_id() {
        let err = AppError::Source(SourceError::EmptyId("Ghost".to_string()));
        assert!(err.user_message().contains("Ghost"));
    }

    #[test]
    fn test_terminal_error() {
        let err = AppError::terminal("raw mode failed");
        assert!(matches!(err, AppError::Terminal(_)));
        assert_eq!(err.user_message(), "Terminal error: raw mode failed");
    }

    #[test]
    fn test_other_error() {
        let err = AppError::other("something went wrong");
        assert!(matches!(err, AppError::Other(_)));
        assert_eq!(err.user_message(), "something went wrong");
    }
}
