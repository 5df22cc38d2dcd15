//! index-emails - Manage who can access an index configuration
//!
//! Keeps each configuration's email list in `infos/<name>.json` inside a
//! git checkout, grants or revokes access through the index access API,
//! and commits and pushes every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::IndexEmailsError;
