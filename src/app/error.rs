//! Controller error types

use crate::favorites::FavoritesError;
use crate::phrases::{CategoryFilter, PhraseError};
use thiserror::Error;

/// Errors returned by [`App`](super::App) construction and dispatch
///
/// Clipboard and share failures never show up here; they become feedback
/// messages instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Phrase error: {0}")]
    Phrase(#[from] PhraseError),

    #[error("Favorites error: {0}")]
    Favorites(#[from] FavoritesError),

    /// Filter names a category that no phrase has
    #[error("Category '{0}' is not available")]
    UnknownCategory(CategoryFilter),
}
