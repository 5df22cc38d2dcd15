//! Add (or replace) the emails of a configuration and grant them access

use crate::application::EditSession;
use crate::domain::{commit_message, CommitAction, GrantResult};
use crate::error::Result;
use crate::infrastructure::{AccessGrantClient, RecordStore, VersionControl};
use indexmap::IndexMap;
use std::io::{BufRead, Write};

/// Service behind `index-emails add`
pub struct AddEmailsService<'a> {
    store: RecordStore,
    client: &'a dyn AccessGrantClient,
    vcs: &'a dyn VersionControl,
}

impl<'a> AddEmailsService<'a> {
    pub fn new(
        store: RecordStore,
        client: &'a dyn AccessGrantClient,
        vcs: &'a dyn VersionControl,
    ) -> Self {
        AddEmailsService { store, client, vcs }
    }

    /// Decide the final list, persist it, grant every email, then commit.
    ///
    /// A non-empty `emails` replaces the stored list as-is; otherwise the
    /// operator edits the stored list through `session`. The record is written
    /// before any grant is attempted and nothing is rolled back: a failed grant
    /// still commits the written record before the error is returned.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        config_name: &str,
        emails: &[String],
        session: &mut EditSession<R, W>,
    ) -> Result<IndexMap<String, GrantResult>> {
        // 1. Final email list
        let emails = if emails.is_empty() {
            let stored = self.store.read_emails(config_name)?;
            session.run(stored)?
        } else {
            emails.to_vec()
        };

        // 2. Persist
        let created = self.store.write_emails(config_name, &emails)?;

        // 3. Grant every email in the final list, stopping at the first failure
        let granted = self.grant_all(config_name, &emails);

        // 4. Publish what was written, even if a grant failed
        let file = self.store.relative_record_path(config_name)?;
        let message = commit_message(CommitAction::for_write(created), config_name);
        self.vcs.commit_and_push(&file, &message);

        let statuses = granted?;
        tracing::info!(
            config = config_name,
            created,
            count = emails.len(),
            "emails saved and granted"
        );
        Ok(statuses)
    }

    fn grant_all(
        &self,
        config_name: &str,
        emails: &[String],
    ) -> Result<IndexMap<String, GrantResult>> {
        let mut statuses = IndexMap::new();
        for email in emails {
            let result = self.client.grant(config_name, email)?;
            statuses.insert(email.clone(), result);
        }
        Ok(statuses)
    }
}
