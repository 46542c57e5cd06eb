//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **session**: Interactive loop over phrases and favorites (default)
//! - **phrase**: Show one random phrase, optionally copying, favoriting or sharing it
//! - **categories**: List the available categories
//! - **favorites**: List, search and remove favorites
//! - **config**: Read and change configuration settings
//!
//! # Examples
//!
//! ```no_run
//! use alma_lux::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Phrase { category, .. } => println!("{category:?}"),
//!     _ => {}
//! }
//! ```

use crate::phrases::CategoryFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "alma")]
#[command(about = "Random inspirational phrases with favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    /// Favorites database directory (overrides config)
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Phrase dataset file (overrides config and the built-in dataset)
    #[arg(long = "phrases", value_name = "FILE", global = true)]
    pub phrases: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive session (default)
    #[command(visible_alias = "s")]
    Session,

    /// Show a random phrase
    #[command(visible_alias = "p")]
    Phrase {
        /// Category to draw from ("todas" for any)
        #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
        category: Option<CategoryFilter>,

        /// Copy the phrase to the clipboard
        #[arg(long = "copy")]
        copy: bool,

        /// Add the phrase to favorites
        #[arg(short = 'f', long = "favorite")]
        favorite: bool,

        /// Share the phrase (falls back to the clipboard)
        #[arg(long = "share")]
        share: bool,
    },

    /// List available categories
    #[command(visible_alias = "c")]
    Categories,

    /// Manage favorites
    #[command(visible_alias = "f")]
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Favorites subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesCommands {
    /// List favorites, optionally filtered by a search query
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive text to look for in phrase or author
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Remove a favorite by its number in the (searched) list
    #[command(visible_alias = "rm")]
    Remove {
        /// Number shown by `favorites list` (starting at 1)
        #[arg(value_name = "NUMBER")]
        number: usize,

        /// Query the number refers to
        #[arg(short = 's', long = "search", value_name = "QUERY")]
        search: Option<String>,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to an interactive session
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Session)
    }
}
