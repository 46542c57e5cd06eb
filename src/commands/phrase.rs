//! Phrase command - one random phrase with optional follow-up actions

use super::{Result, open_app, print_feedback};
use crate::app::Action;
use crate::config::AlmaConfig;
use crate::output;
use crate::phrases::CategoryFilter;

/// Follow-up actions for the drawn phrase
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseOptions {
    pub copy: bool,
    pub favorite: bool,
    pub share: bool,
}

/// Draw a phrase, print it, then apply the requested actions in order
///
/// # Errors
/// Returns an error if the category is not available or favorites cannot be saved.
pub fn execute(
    config: &AlmaConfig,
    category: Option<CategoryFilter>,
    options: PhraseOptions,
    quiet: bool,
) -> Result<()> {
    let mut app = open_app(config)?;

    match category {
        Some(filter) => app.dispatch(Action::SetCategory(filter))?,
        None => app.dispatch(Action::NewPhrase)?,
    }
    println!("{}", output::phrase_card(app.current(), quiet));

    let actions = [
        (options.copy, Action::Copy),
        (options.favorite, Action::Favorite),
        (options.share, Action::Share),
    ];
    print_feedback(&app, quiet);
    for (requested, action) in actions {
        if !requested {
            continue;
        }
        let before = (app.feedback().text().map(str::to_string), app.feedback().deadline());
        app.dispatch(action)?;
        // A silent action (successful native share) leaves the old message in place.
        let after = (app.feedback().text().map(str::to_string), app.feedback().deadline());
        if after != before {
            print_feedback(&app, quiet);
        }
    }
    Ok(())
}
