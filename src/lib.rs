//! Alma Lux - random inspirational phrases with favorites
//!
//! This library holds the phrase categorizer, random selection, favorites
//! management backed by an embedded sled database, and the interaction
//! controller that ties them to clipboard and share capabilities.

use thiserror::Error;

pub mod app;
pub mod capabilities;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod favorites;
pub mod feedback;
pub mod logging;
pub mod output;
pub mod phrases;
pub mod selector;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum AlmaError {
    /// Controller error
    #[error(transparent)]
    App(#[from] app::AppError),
    /// Storage error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Phrase dataset error
    #[error(transparent)]
    PhraseError(#[from] phrases::PhraseError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
