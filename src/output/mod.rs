//! Output formatting for CLI display
//!
//! Favorites are numbered from 1 on screen; commands convert back to the
//! 0-based positions the controller uses.

use crate::feedback::{FeedbackKind, FeedbackMessage};
use crate::phrases::{CategoryFilter, TaggedPhrase};
use colored::Colorize;

pub const NO_RESULTS: &str = "Nenhum resultado";
pub const NO_FAVORITES: &str = "Nenhuma frase favorita ainda.";

/// Format the displayed phrase
#[must_use]
pub fn phrase_card(phrase: &TaggedPhrase, quiet: bool) -> String {
    if quiet {
        return phrase.formatted();
    }
    format!(
        "\n  {}\n    - {}  {}\n",
        format!("\"{}\"", phrase.frase).bold(),
        phrase.autor.dimmed(),
        format!("[{}]", phrase.category).cyan()
    )
}

/// Format one entry of the favorites list
#[must_use]
pub fn favorite_line(position: usize, phrase: &TaggedPhrase, quiet: bool) -> String {
    if quiet {
        phrase.formatted()
    } else {
        format!(
            "  {}. \"{}\" - {} {}",
            position + 1,
            phrase.frase,
            phrase.autor.dimmed(),
            format!("[{}]", phrase.category).cyan()
        )
    }
}

/// Text shown when no favorite is visible
#[must_use]
pub const fn empty_favorites(query: &str) -> &'static str {
    if query.is_empty() { NO_FAVORITES } else { NO_RESULTS }
}

/// Format a category entry, marking the active one
#[must_use]
pub fn category_line(filter: CategoryFilter, active: bool, quiet: bool) -> String {
    if quiet {
        return filter.to_string();
    }
    let line = format!("  {} ({})", filter.label(), filter);
    if active { line.green().to_string() } else { line }
}

/// Format a feedback message according to its kind
#[must_use]
pub fn feedback_line(message: &FeedbackMessage) -> String {
    match message.kind {
        FeedbackKind::Success => format!("{} {}", "✓".green(), message.text),
        FeedbackKind::Error => format!("{} {}", "❌".red(), message.text),
        FeedbackKind::Info => format!("{} {}", "ℹ".blue(), message.text),
    }
}
