//! Delete a configuration's record and revoke its emails

use crate::domain::{commit_message, CommitAction};
use crate::error::Result;
use crate::infrastructure::{AccessGrantClient, RecordStore, VersionControl};

/// Service behind `index-emails delete`
pub struct DeleteEmailsService<'a> {
    store: RecordStore,
    client: &'a dyn AccessGrantClient,
    vcs: &'a dyn VersionControl,
}

impl<'a> DeleteEmailsService<'a> {
    pub fn new(
        store: RecordStore,
        client: &'a dyn AccessGrantClient,
        vcs: &'a dyn VersionControl,
    ) -> Self {
        DeleteEmailsService { store, client, vcs }
    }

    /// Revoke every stored email, remove the record and commit.
    ///
    /// Returns the revoked emails, or `None` when there was no record and
    /// nothing was done. A failed revoke stops here with the record still on disk.
    pub fn execute(&self, config_name: &str) -> Result<Option<Vec<String>>> {
        let emails = match self.store.read(config_name)? {
            Some(emails) => emails,
            None => {
                tracing::info!(config = config_name, "no record, nothing to delete");
                return Ok(None);
            }
        };

        for email in &emails {
            self.client.revoke(config_name, email)?;
        }

        self.store.remove(config_name)?;

        let file = self.store.relative_record_path(config_name)?;
        self.vcs
            .commit_and_push(&file, &commit_message(CommitAction::Delete, config_name));

        Ok(Some(emails))
    }
}
