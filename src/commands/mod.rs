//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and drives the interaction controller.

pub mod categories;
pub mod config;
pub mod favorites;
pub mod phrase;
pub mod session;

pub use categories::execute as categories;
pub use phrase::execute as phrase;
pub use session::execute as session;

use crate::AlmaError;
use crate::app::{App, AppBuilder};
use crate::capabilities::{CommandShare, NoShare};
use crate::config::AlmaConfig;
use crate::db::{Database, PersistenceStore};
use crate::output;
use crate::phrases::{self, TaggedPhrase};

type Result<T> = std::result::Result<T, AlmaError>;

/// Load the configured dataset, or the built-in one
///
/// # Errors
/// Returns an error if the dataset file cannot be read or is invalid.
pub fn load_phrases(config: &AlmaConfig) -> Result<Vec<TaggedPhrase>> {
    let phrases = match &config.phrases_file {
        Some(path) => phrases::load_dataset(path)?,
        None => phrases::default_dataset()?,
    };
    Ok(phrases)
}

/// Open the favorites database and build a controller from `config`
///
/// # Errors
/// Returns an error if the dataset or database cannot be opened.
pub fn open_app(config: &AlmaConfig) -> Result<App<Database>> {
    let phrases = load_phrases(config)?;
    let db = Database::open(config.database_path()?)?;

    let builder = AppBuilder::new(phrases, PersistenceStore::new(db))
        .with_feedback_ttl(config.feedback_ttl())
        .with_share_url(config.share_url.clone());
    let builder = match &config.share_command {
        Some(command) => builder.with_share(CommandShare::new(command.clone())),
        None => builder.with_share(NoShare),
    };
    Ok(builder.build()?)
}

/// Print the current feedback message, if any
pub fn print_feedback(app: &App<Database>, quiet: bool) {
    if quiet {
        return;
    }
    if let Some(message) = app.feedback().current() {
        eprintln!("{}", output::feedback_line(message));
    }
}
