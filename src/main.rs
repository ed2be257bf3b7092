use clap::Parser;
use repodeck::application::{init::init, ConfigService, DeleteResult, RepoManager};
use repodeck::cli::{format_repo_list, print_notification, Cli, Commands};
use repodeck::domain::RepoId;
use repodeck::error::Result;
use repodeck::infrastructure::{FileSystemWorkspace, JsonFileStore};
use repodeck::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized repodeck registry at {}", path.display());
            Ok(())
        }
        Commands::Add { url, label } => {
            let mut manager = open_manager()?;
            let notification = manager.add(&url, label.as_deref())?;
            print_notification(&notification);
            Ok(())
        }
        Commands::Delete { id } => {
            let mut manager = open_manager()?;
            match manager.delete(&RepoId::from(id))? {
                DeleteResult::Deleted(notification) => print_notification(&notification),
                DeleteResult::ConfirmationRequired(warning) => {
                    print_notification(&warning.to_notification());
                    eprintln!("The master repository was not deleted.");
                }
            }
            Ok(())
        }
        Commands::Sync { id } => {
            let mut manager = open_manager()?;
            let notification = manager.sync(&RepoId::from(id))?;
            print_notification(&notification);
            Ok(())
        }
        Commands::List => {
            let workspace = FileSystemWorkspace::discover()?;
            let config = workspace.load_config()?;
            let manager = RepoManager::open_with_system_clock(workspace.store(&config))?;
            print!("{}", format_repo_list(manager.list(), &config.date_format)?);
            if manager.list().is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemWorkspace::discover()?);

            if list {
                let config = service.list()?;
                println!("store_file = {}", config.store_file);
                println!("date_format = {}", config.date_format);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: repodeck config [--list | <key> [<value>]]");
                println!("Valid keys: store_file, date_format, created");
            }
            Ok(())
        }
    }
}

fn open_manager() -> Result<RepoManager<JsonFileStore>> {
    let workspace = FileSystemWorkspace::discover()?;
    let config = workspace.load_config()?;
    RepoManager::open_with_system_clock(workspace.store(&config))
}
