//! Phrase dataset error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or interpreting the phrase dataset
#[derive(Debug, Error)]
pub enum PhraseError {
    /// The dataset document is not valid JSON or has the wrong shape
    #[error("Failed to parse phrase dataset: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The dataset file could not be read
    #[error("Failed to read phrase dataset '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record has an empty `frase`
    #[error("Phrase #{0} has empty text")]
    EmptyPhrase(usize),

    /// The dataset contains no phrases at all
    #[error("Phrase dataset is empty")]
    EmptyDataset,

    /// A category name that is not one of the known tags
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
