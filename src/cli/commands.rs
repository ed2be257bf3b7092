//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repodeck")]
#[command(about = "Manage and sync your Git repositories in one place", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by REPODECK_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new registry
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a repository (the first one becomes the master)
    Add {
        /// Git URL (e.g., https://github.com/username/repo)
        url: String,

        /// Display name for the repository
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Delete a repository by id
    Delete {
        /// Repository id as shown by `repodeck list`
        id: String,
    },

    /// Mark a repository as synced now
    Sync {
        /// Repository id as shown by `repodeck list`
        id: String,
    },

    /// List registered repositories
    List,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
