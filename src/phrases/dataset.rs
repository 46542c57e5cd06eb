//! Phrase dataset loading
//!
//! The dataset is a JSON document of the form
//! `{"frases": [{"frase": "...", "autor": "..."}, ...]}`. A default copy is
//! compiled into the binary; a file on disk can replace it.

use super::{Phrase, PhraseError, TaggedPhrase, categorize};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_DATASET: &str = include_str!("../../data/frases.json");

#[derive(Debug, Deserialize)]
struct PhraseDocument {
    frases: Vec<Phrase>,
}

/// Parse and categorize a dataset document
///
/// # Errors
///
/// Returns `PhraseError::ParseError` for malformed JSON, `EmptyPhrase` if any
/// record has blank text, and `EmptyDataset` if there are no records.
pub fn parse_dataset(json: &str) -> Result<Vec<TaggedPhrase>, PhraseError> {
    let document: PhraseDocument = serde_json::from_str(json)?;

    if document.frases.is_empty() {
        return Err(PhraseError::EmptyDataset);
    }
    if let Some(index) = document.frases.iter().position(|p| p.frase.trim().is_empty()) {
        return Err(PhraseError::EmptyPhrase(index));
    }

    Ok(document.frases.into_iter().map(categorize).collect())
}

/// Load a dataset from a file on disk
///
/// # Errors
///
/// Returns `PhraseError::IoError` if the file cannot be read, or any error
/// from [`parse_dataset`].
pub fn load_dataset(path: &Path) -> Result<Vec<TaggedPhrase>, PhraseError> {
    let json = fs::read_to_string(path).map_err(|source| PhraseError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let phrases = parse_dataset(&json)?;
    tracing::debug!(path = %path.display(), count = phrases.len(), "Loaded phrase dataset");
    Ok(phrases)
}

/// The dataset compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded document is itself invalid.
pub fn default_dataset() -> Result<Vec<TaggedPhrase>, PhraseError> {
    parse_dataset(DEFAULT_DATASET)
}
