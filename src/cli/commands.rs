//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "index-emails")]
#[command(about = "Manage the emails granted access to an index configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration directory (default: $INDEX_EMAILS_DIR, then the current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set the emails of a configuration and grant them access
    Add {
        /// Configuration (index) name
        name: String,

        /// Emails to store, replacing the current list (omit for an interactive session)
        #[arg(short, long = "email", value_name = "EMAIL")]
        emails: Vec<String>,
    },

    /// Revoke every email of a configuration and remove its record
    Delete {
        /// Configuration (index) name
        name: String,
    },

    /// Show the emails stored for a configuration
    Show {
        /// Configuration (index) name
        name: String,
    },
}
