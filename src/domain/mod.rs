//! Domain layer - Records, edit commands and grant outcomes

pub mod command;
pub mod commit;
pub mod grant;
pub mod record;

pub use command::{EditCommand, EditError};
pub use commit::{commit_message, CommitAction};
pub use grant::GrantResult;
pub use record::{is_valid_config_name, ConfigRecord};
