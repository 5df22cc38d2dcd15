//! Configuration record persisted as `infos/<name>.json`

use serde::Serialize;

/// One configuration's access record.
///
/// Only used to create new files; field order is the on-disk key order.
/// Existing files are read and updated as raw JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigRecord {
    pub name: String,
    pub url: String,
    pub emails: Vec<String>,
    pub categories: Vec<String>,
}

impl ConfigRecord {
    /// Create a fresh record with an empty url and no categories
    pub fn new(name: &str, emails: Vec<String>) -> Self {
        ConfigRecord {
            name: name.to_string(),
            url: String::new(),
            emails,
            categories: Vec::new(),
        }
    }
}

/// Check that a configuration name maps to exactly one file under `infos/`.
pub fn is_valid_config_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}
