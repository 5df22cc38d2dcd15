//! File system store for configuration records

use crate::domain::{is_valid_config_name, ConfigRecord};
use crate::error::{IndexEmailsError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory holding one JSON record per configuration
pub const INFOS_DIR: &str = "infos";

/// Reads and writes `infos/<name>.json` under a configuration directory
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Create a store without checking the directory
    pub fn new(root: PathBuf) -> Self {
        RecordStore { root }
    }

    /// Open a store rooted at an existing configuration directory
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(IndexEmailsError::NotConfigDirectory(root.to_path_buf()));
        }
        Ok(RecordStore::new(root.to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record file relative to the store root
    pub fn relative_record_path(&self, config_name: &str) -> Result<PathBuf> {
        if !is_valid_config_name(config_name) {
            return Err(IndexEmailsError::InvalidConfigName(config_name.to_string()));
        }
        Ok(Path::new(INFOS_DIR).join(format!("{}.json", config_name)))
    }

    /// Absolute path of the record file
    pub fn record_path(&self, config_name: &str) -> Result<PathBuf> {
        Ok(self.root.join(self.relative_record_path(config_name)?))
    }

    /// Check if a record file exists for this configuration
    pub fn exists(&self, config_name: &str) -> Result<bool> {
        Ok(self.record_path(config_name)?.is_file())
    }

    /// Read the stored emails, `None` if there is no file.
    ///
    /// Only `emails` is interpreted; every other key may hold any JSON value.
    pub fn read(&self, config_name: &str) -> Result<Option<Vec<String>>> {
        let path = self.record_path(config_name)?;
        if !path.is_file() {
            return Ok(None);
        }

        let object = Self::load_object(&path)?;
        let emails = object.get("emails").cloned().unwrap_or(Value::Null);
        Ok(Some(serde_json::from_value(emails)?))
    }

    /// Stored emails in order (empty if there is no record)
    pub fn read_emails(&self, config_name: &str) -> Result<Vec<String>> {
        Ok(self.read(config_name)?.unwrap_or_default())
    }

    fn load_object(path: &Path) -> Result<Map<String, Value>> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the email list, creating the record if needed.
    ///
    /// An existing record is edited as a raw JSON object so only `emails`
    /// changes; other keys keep their values and order.
    /// Returns `true` if the file was newly created.
    pub fn write_emails(&self, config_name: &str, emails: &[String]) -> Result<bool> {
        let path = self.record_path(config_name)?;
        let created = !path.is_file();

        let contents = if created {
            serde_json::to_string_pretty(&ConfigRecord::new(config_name, emails.to_vec()))?
        } else {
            let mut object = Self::load_object(&path)?;
            object.insert("emails".to_string(), Value::from(emails.to_vec()));
            serde_json::to_string_pretty(&object)?
        };

        Self::write_atomic(&path, &contents)?;
        tracing::debug!(
            config = config_name,
            created,
            count = emails.len(),
            "wrote record {}",
            path.display()
        );

        Ok(created)
    }

    /// Remove the record file. Returns `false` if there was nothing to remove.
    pub fn remove(&self, config_name: &str) -> Result<bool> {
        let path = self.record_path(config_name)?;
        if !path.is_file() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        tracing::debug!(config = config_name, "removed record {}", path.display());
        Ok(true)
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("record.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}
