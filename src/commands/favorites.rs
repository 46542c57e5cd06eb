//! Favorites commands

use super::{Result, open_app, print_feedback};
use crate::AlmaError;
use crate::app::Action;
use crate::cli::FavoritesCommands;
use crate::config::AlmaConfig;
use crate::output;

/// Execute a favorites subcommand
///
/// # Errors
/// Returns an error if the database cannot be opened, the number is not in
/// the visible list, or the removal cannot be saved.
pub fn execute(config: &AlmaConfig, command: &FavoritesCommands, quiet: bool) -> Result<()> {
    let mut app = open_app(config)?;

    match command {
        FavoritesCommands::List { query } => {
            app.dispatch(Action::Search(query.clone().unwrap_or_default()))?;
            let mut shown = 0;
            for (position, favorite) in app.visible_favorites().enumerate() {
                println!("{}", output::favorite_line(position, favorite, quiet));
                shown += 1;
            }
            if shown == 0 && !quiet {
                println!("{}", output::empty_favorites(&app.state().query));
            }
        }
        FavoritesCommands::Remove { number, search } => {
            let index = number
                .checked_sub(1)
                .ok_or_else(|| AlmaError::InvalidInput("Favorite numbers start at 1".into()))?;
            app.dispatch(Action::Search(search.clone().unwrap_or_default()))?;
            app.dispatch(Action::RemoveFavorite(index))?;
        }
    }

    print_feedback(&app, quiet);
    Ok(())
}
