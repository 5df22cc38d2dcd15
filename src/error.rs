//! Error types for index-emails

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the index-emails application
#[derive(Debug, Error)]
pub enum IndexEmailsError {
    #[error("Not a configuration directory: {0}")]
    NotConfigDirectory(PathBuf),

    #[error("Invalid configuration name: '{0}'")]
    InvalidConfigName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Access API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl IndexEmailsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            IndexEmailsError::NotConfigDirectory(_) => 2,
            IndexEmailsError::InvalidConfigName(_) => 3,
            IndexEmailsError::Http(_) | IndexEmailsError::Api { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            IndexEmailsError::NotConfigDirectory(path) => {
                format!(
                    "Not a configuration directory: {}\n\n\
                    Suggestions:\n\
                    • Pass --dir pointing at your configuration checkout\n\
                    • Set INDEX_EMAILS_DIR environment variable to the checkout path",
                    path.display()
                )
            }
            IndexEmailsError::InvalidConfigName(name) => {
                format!(
                    "Invalid configuration name: '{}'\n\n\
                    A configuration name must be a single file name without path separators.\n\
                    Example: index-emails add acme",
                    name
                )
            }
            IndexEmailsError::Api { status, body } if *status == 401 || *status == 403 => {
                format!(
                    "Access API rejected the credentials ({}): {}\n\n\
                    Suggestions:\n\
                    • Set INDEX_EMAILS_API_KEY environment variable\n\
                    • Add api_key to .index-emails.toml in the configuration directory",
                    status, body
                )
            }
            IndexEmailsError::Json(e) => {
                format!(
                    "Could not parse a record file: {}\n\n\
                    Check the JSON under infos/ for syntax errors and a list-valued \"emails\" key.",
                    e
                )
            }
            IndexEmailsError::Config(msg) if msg.contains("api_url") => {
                format!(
                    "{}\n\n\
                    Set INDEX_EMAILS_API_URL or add api_url to .index-emails.toml",
                    msg
                )
            }
            IndexEmailsError::Config(msg) => msg.clone(),
            IndexEmailsError::TomlDeserialize(e) => {
                format!("Could not parse .index-emails.toml: {}", e)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using IndexEmailsError
pub type Result<T> = std::result::Result<T, IndexEmailsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            IndexEmailsError::NotConfigDirectory(PathBuf::from("/tmp")).exit_code(),
            2
        );
        assert_eq!(
            IndexEmailsError::InvalidConfigName("../x".to_string()).exit_code(),
            3
        );
        assert_eq!(
            IndexEmailsError::Api {
                status: 500,
                body: "boom".to_string()
            }
            .exit_code(),
            4
        );
        assert_eq!(IndexEmailsError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_not_config_directory_suggestion() {
        let err = IndexEmailsError::NotConfigDirectory(PathBuf::from("/tmp/missing"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--dir"));
        assert!(msg.contains("INDEX_EMAILS_DIR"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_unauthorized_api_suggestions() {
        let err = IndexEmailsError::Api {
            status: 403,
            body: "forbidden".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("INDEX_EMAILS_API_KEY"));
        assert!(msg.contains("forbidden"));
    }

    #[test]
    fn test_missing_api_url_suggestion() {
        let err = IndexEmailsError::Config("No api_url configured".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("INDEX_EMAILS_API_URL"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = IndexEmailsError::Api {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.display_with_suggestions(), "Access API returned 500: boom");
    }
}
