use clap::Parser;
use index_emails::application::{show_record, AddEmailsService, DeleteEmailsService, EditSession};
use index_emails::cli::{format_email_list, format_grant_report, format_revoked, Cli, Commands};
use index_emails::error::IndexEmailsError;
use index_emails::infrastructure::{GitSync, HttpGrantClient, RecordStore, Settings};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DIR_ENV: &str = "INDEX_EMAILS_DIR";

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("index_emails=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Configuration directory from --dir, then INDEX_EMAILS_DIR, then the current directory
fn config_dir(cli_dir: Option<PathBuf>) -> Result<PathBuf, IndexEmailsError> {
    if let Some(dir) = cli_dir {
        return Ok(dir);
    }
    match std::env::var(DIR_ENV) {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Ok(std::env::current_dir()?),
    }
}

fn run(cli: Cli) -> Result<(), IndexEmailsError> {
    let dir = config_dir(cli.dir)?;
    let store = RecordStore::open(&dir)?;

    match cli.command {
        Commands::Show { name } => {
            match show_record(&store, &name)? {
                Some(emails) => println!("{}", format_email_list(&emails).trim_end()),
                None => println!("No record for {}", name),
            }
            Ok(())
        }
        Commands::Add { name, emails } => {
            let settings = Settings::load(store.root())?;
            let client = HttpGrantClient::from_settings(&settings)?;
            let git = GitSync::new(store.root().to_path_buf(), settings.remote, settings.branch);
            let service = AddEmailsService::new(store, &client, &git);

            let stdin = io::stdin();
            let mut session = EditSession::new(stdin.lock(), io::stdout());
            let statuses = service.execute(&name, &emails, &mut session)?;

            println!("{}", format_grant_report(&statuses).trim_end());
            Ok(())
        }
        Commands::Delete { name } => {
            let settings = Settings::load(store.root())?;
            let client = HttpGrantClient::from_settings(&settings)?;
            let git = GitSync::new(store.root().to_path_buf(), settings.remote, settings.branch);
            let service = DeleteEmailsService::new(store, &client, &git);

            let revoked = service.execute(&name)?;
            println!("{}", format_revoked(&name, revoked.as_deref()).trim_end());
            Ok(())
        }
    }
}
