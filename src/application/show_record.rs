//! Show a configuration's stored emails

use crate::error::Result;
use crate::infrastructure::RecordStore;

/// Load the stored emails for display, `None` if the configuration has no record.
pub fn show_record(store: &RecordStore, config_name: &str) -> Result<Option<Vec<String>>> {
    store.read(config_name)
}
