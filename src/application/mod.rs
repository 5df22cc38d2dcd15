//! Application layer - Use cases and orchestration

pub mod add_emails;
pub mod delete_emails;
pub mod edit_session;
pub mod show_record;

#[cfg(test)]
pub(crate) mod testing;

pub use add_emails::AddEmailsService;
pub use delete_emails::DeleteEmailsService;
pub use edit_session::EditSession;
pub use show_record::show_record;
