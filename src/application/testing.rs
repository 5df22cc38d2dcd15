//! In-memory collaborators for workflow tests

use crate::domain::GrantResult;
use crate::error::{IndexEmailsError, Result};
use crate::infrastructure::{AccessGrantClient, VersionControl};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Records successful grants and revokes; fails on one chosen email
#[derive(Default)]
pub struct RecordingClient {
    fail_on: Option<String>,
    grants: RefCell<Vec<(String, String)>>,
    revokes: RefCell<Vec<(String, String)>>,
}

impl RecordingClient {
    pub fn failing_on(email: &str) -> Self {
        RecordingClient {
            fail_on: Some(email.to_string()),
            ..Default::default()
        }
    }

    pub fn grants(&self) -> Vec<(String, String)> {
        self.grants.borrow().clone()
    }

    pub fn revokes(&self) -> Vec<(String, String)> {
        self.revokes.borrow().clone()
    }

    fn check(&self, email: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(email) {
            return Err(IndexEmailsError::Api {
                status: 500,
                body: format!("refused {}", email),
            });
        }
        Ok(())
    }
}

impl AccessGrantClient for RecordingClient {
    fn grant(&self, config_name: &str, email: &str) -> Result<GrantResult> {
        self.check(email)?;
        self.grants
            .borrow_mut()
            .push((config_name.to_string(), email.to_string()));
        Ok(GrantResult::Granted)
    }

    fn revoke(&self, config_name: &str, email: &str) -> Result<()> {
        self.check(email)?;
        self.revokes
            .borrow_mut()
            .push((config_name.to_string(), email.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingVcs {
    commits: RefCell<Vec<(PathBuf, String)>>,
}

impl RecordingVcs {
    pub fn commits(&self) -> Vec<(PathBuf, String)> {
        self.commits.borrow().clone()
    }
}

impl VersionControl for RecordingVcs {
    fn commit_and_push(&self, file: &Path, message: &str) {
        self.commits
            .borrow_mut()
            .push((file.to_path_buf(), message.to_string()));
    }
}
