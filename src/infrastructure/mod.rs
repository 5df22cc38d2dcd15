//! Infrastructure layer - Record files, git and the access service

pub mod git;
pub mod grant_client;
pub mod settings;
pub mod store;

pub use git::{GitSync, VersionControl};
pub use grant_client::{AccessGrantClient, HttpGrantClient};
pub use settings::Settings;
pub use store::RecordStore;
