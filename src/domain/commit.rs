//! Commit message generation for record changes

use std::fmt;

/// What happened to a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitAction {
    Add,
    Update,
    Delete,
}

impl CommitAction {
    /// `Add` for a newly created record, `Update` otherwise
    pub fn for_write(created: bool) -> Self {
        if created {
            CommitAction::Add
        } else {
            CommitAction::Update
        }
    }
}

impl fmt::Display for CommitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommitAction::Add => "Add",
            CommitAction::Update => "Update",
            CommitAction::Delete => "Delete",
        };
        f.write_str(s)
    }
}

/// Build the commit message for a change to `config_name`'s record
pub fn commit_message(action: CommitAction, config_name: &str) -> String {
    format!("deploy: {} emails for {}", action, config_name)
}
