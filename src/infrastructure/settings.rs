//! Tool settings: `.index-emails.toml` in the configuration directory plus env overrides

use crate::error::{IndexEmailsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const SETTINGS_FILE: &str = ".index-emails.toml";
pub const API_URL_ENV: &str = "INDEX_EMAILS_API_URL";
pub const API_KEY_ENV: &str = "INDEX_EMAILS_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_remote")]
    pub remote: String,
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "master".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: None,
            api_key: None,
            remote: default_remote(),
            branch: default_branch(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration directory, then apply env overrides.
    /// A missing settings file yields the defaults.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut settings = Self::load_file(config_dir)?;
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    fn load_file(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(SETTINGS_FILE);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(IndexEmailsError::Io(e)),
        }
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
            self.api_url = Some(url);
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// The access API base URL, required by grant and revoke
    pub fn require_api_url(&self) -> Result<&str> {
        self.api_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .ok_or_else(|| IndexEmailsError::Config("No api_url configured".to_string()))
    }
}
