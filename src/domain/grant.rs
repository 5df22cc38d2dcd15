//! Outcome of granting an email access to an index

use std::fmt;

/// Per-email result reported by the access service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantResult {
    /// Access was newly granted
    Granted,
    /// The user already had access to this index
    AlreadyGranted,
    /// The user has no account yet; an invitation was sent
    InvitationPending(String),
}

impl fmt::Display for GrantResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantResult::Granted => write!(f, "granted"),
            GrantResult::AlreadyGranted => write!(f, "already had access"),
            GrantResult::InvitationPending(url) => write!(f, "invitation pending: {}", url),
        }
    }
}
