//! Favorites error types

use crate::db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Removal index outside the visible list
    #[error("Favorite index {index} out of range (visible: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Backing store failure
    #[error("Favorites storage error: {0}")]
    Db(#[from] DbError),
}
