//! Output formatting utilities

use crate::domain::GrantResult;
use indexmap::IndexMap;

/// Format stored emails as a numbered list
pub fn format_email_list(emails: &[String]) -> String {
    if emails.is_empty() {
        return "No emails".to_string();
    }

    let mut output = String::new();
    for (i, email) in emails.iter().enumerate() {
        output.push_str(&format!("{}) {}\n", i, email));
    }
    output
}

/// Format the per-email outcome of an add
pub fn format_grant_report(statuses: &IndexMap<String, GrantResult>) -> String {
    if statuses.is_empty() {
        return "No emails granted".to_string();
    }

    let mut output = String::new();
    for (email, status) in statuses {
        output.push_str(&format!("{}: {}\n", email, status));
    }
    output
}

/// Format the outcome of a delete; `None` means there was no record
pub fn format_revoked(config_name: &str, revoked: Option<&[String]>) -> String {
    let emails = match revoked {
        None => return format!("No record for {}", config_name),
        Some([]) => return format!("Deleted {}, no emails to revoke", config_name),
        Some(emails) => emails,
    };

    let mut output = format!("Deleted {}, revoked:\n", config_name);
    for email in emails {
        output.push_str(&format!("  {}\n", email));
    }
    output
}
