//! Error types for simple_hashtag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for simple_hashtag
#[derive(Debug, Error)]
pub enum HashtagError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl HashtagError {
    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HashtagError::InvalidArgument(_) => {
                format!(
                    "{}\n\n\
                    Tags can be given as:\n\
                    • a string, e.g. \"Fun\" or \"Fun, Happy\" (with parse enabled)\n\
                    • a number or boolean, which is used as its text form\n\
                    • a list of any of the above",
                    self
                )
            }
            HashtagError::Config(msg) => {
                if msg.contains("delimiter") {
                    format!(
                        "{}\n\n\
                        The delimiter must be a non-empty string or a non-empty list of\n\
                        non-empty strings.\n\
                        Examples:\n\
                        delimiter = \",\"\n\
                        delimiter = [\",\", \";\"]",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            HashtagError::ConfigNotFound(path) => {
                format!(
                    "Configuration file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to Config::load_from_path\n\
                    • Use Config::default() to run with the built-in settings",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HashtagError
pub type Result<T> = std::result::Result<T, HashtagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_suggestions() {
        let err = HashtagError::InvalidArgument("table values are not tags".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Invalid argument: table values are not tags"));
        assert!(msg.contains("a list of any of the above"));
    }

    #[test]
    fn test_config_delimiter_suggestions() {
        let err = HashtagError::Config("delimiter must not be empty".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("delimiter = \",\""));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_config_not_found_suggestions() {
        let err = HashtagError::ConfigNotFound(PathBuf::from("/tmp/missing.toml"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/missing.toml"));
        assert!(msg.contains("Config::default()"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = HashtagError::Config("unknown key".to_string());
        assert_eq!(err.display_with_suggestions(), "unknown key");
    }
}
