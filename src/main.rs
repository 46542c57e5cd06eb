//! Alma Lux CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default command)
//! alma
//! alma session
//!
//! # One random phrase, from a category, copied to the clipboard
//! alma phrase -c encorajamento --copy
//!
//! # Favorite the drawn phrase
//! alma phrase --favorite
//!
//! # List and search favorites, remove the second match
//! alma favorites list
//! alma favorites list coragem
//! alma favorites rm 2 --search coragem
//!
//! # Quiet mode (only output results)
//! alma -q phrase
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/alma-lux/config.toml` on Linux) and created with defaults on first run.

use alma_lux::{
    AlmaError,
    cli::{Cli, Commands},
    commands::{self, phrase::PhraseOptions},
    config::AlmaConfig,
    logging,
};

type Result<T> = std::result::Result<T, AlmaError>;

/// Main entry point for the alma application
///
/// # Errors
///
/// Returns `AlmaError` if configuration loading fails, the favorites database
/// cannot be opened, or a command handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = AlmaConfig::load()?;

    logging::init(cli.debug, config.log_level.as_deref());

    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return commands::config::execute(config, command, quiet);
    }

    let mut effective = config;
    if let Some(db) = cli.db {
        effective.database = Some(db);
    }
    if let Some(phrases) = cli.phrases {
        effective.phrases_file = Some(phrases);
    }

    match command {
        Commands::Session => commands::session(&effective, quiet),
        Commands::Phrase {
            category,
            copy,
            favorite,
            share,
        } => commands::phrase(
            &effective,
            category,
            PhraseOptions {
                copy,
                favorite,
                share,
            },
            quiet,
        ),
        Commands::Categories => commands::categories(&effective, quiet),
        Commands::Favorites { command } => {
            commands::favorites::execute(&effective, &command, quiet)
        }
        Commands::Config { .. } => unreachable!(),
    }
}
