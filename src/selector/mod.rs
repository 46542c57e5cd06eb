//! Random phrase selection
//!
//! [`PhraseSelector`] owns the canonical, immutable list of tagged phrases.
//! Draws are scoped to a category filter but always return a canonical index,
//! so callers keep a single index space for the whole session.

use crate::phrases::{CategoryFilter, CategoryTag, TaggedPhrase};
use rand::Rng;
use thiserror::Error;

/// Selection errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// No phrase matches the requested category
    #[error("No phrases in category '{0}'")]
    EmptySelection(CategoryFilter),
}

/// Canonical phrase list plus random draws over it
#[derive(Debug, Clone)]
pub struct PhraseSelector {
    phrases: Vec<TaggedPhrase>,
}

impl PhraseSelector {
    #[must_use]
    pub const fn new(phrases: Vec<TaggedPhrase>) -> Self {
        Self { phrases }
    }

    #[must_use]
    pub fn phrases(&self) -> &[TaggedPhrase] {
        &self.phrases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Canonical indices of every phrase matching `filter`
    pub fn matching_indices(&self, filter: CategoryFilter) -> impl Iterator<Item = usize> + '_ {
        self.phrases
            .iter()
            .enumerate()
            .filter(move |(_, p)| filter.matches(p.category))
            .map(|(i, _)| i)
    }

    /// Pick a uniformly random phrase matching `filter`
    ///
    /// Every call is independent; the same index may come back twice in a row.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::EmptySelection` if no phrase matches.
    pub fn select_random<R: Rng + ?Sized>(
        &self,
        filter: CategoryFilter,
        rng: &mut R,
    ) -> Result<usize, SelectionError> {
        let candidates: Vec<usize> = self.matching_indices(filter).collect();
        if candidates.is_empty() {
            return Err(SelectionError::EmptySelection(filter));
        }
        Ok(candidates[rng.gen_range(0..candidates.len())])
    }

    /// Distinct categories in order of first appearance, preceded by `todas`
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen: Vec<CategoryTag> = Vec::new();
        for phrase in &self.phrases {
            if !seen.contains(&phrase.category) {
                seen.push(phrase.category);
            }
        }

        std::iter::once(CategoryFilter::All)
            .chain(seen.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}
