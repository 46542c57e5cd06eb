//! Favorites collection management
//!
//! [`FavoritesManager`] is the only writer of the favorites document. The
//! collection keeps insertion order and never holds two entries with the same
//! `frase` text. Every successful add or remove rewrites the whole document;
//! the in-memory collection only changes once the store accepted the write.

pub mod error;

pub use error::FavoritesError;

use crate::db::{DbError, KeyValueStore, PersistenceStore};
use crate::phrases::TaggedPhrase;

type Result<T> = std::result::Result<T, FavoritesError>;

/// Result of [`FavoritesManager::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended and persisted
    Added,
    /// An entry with the same text already exists; nothing written
    AlreadyPresent,
}

impl AddOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::AlreadyPresent => "already-present",
        }
    }
}

pub struct FavoritesManager<S> {
    store: PersistenceStore<S>,
    favorites: Vec<TaggedPhrase>,
}

impl<S: KeyValueStore> FavoritesManager<S> {
    /// Load the persisted collection
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError::Db(DbError::CorruptStore)` for a malformed
    /// payload, or any backend read error.
    pub fn load(store: PersistenceStore<S>) -> Result<Self> {
        let favorites = store.load()?;
        tracing::debug!(count = favorites.len(), "Loaded favorites");
        Ok(Self { store, favorites })
    }

    /// Load the persisted collection, starting empty if it is corrupt
    ///
    /// The corrupt payload is copied aside and left in place; it is only
    /// replaced by the next successful mutation. The decode error is handed
    /// back so the caller can report it. A failed copy is logged and does not
    /// stop the load.
    ///
    /// # Errors
    ///
    /// Backend read errors for the favorites key are still returned.
    pub fn load_or_recover(store: PersistenceStore<S>) -> Result<(Self, Option<DbError>)> {
        match store.load() {
            Ok(favorites) => Ok((Self { store, favorites }, None)),
            Err(DbError::CorruptStore(reason)) => {
                tracing::warn!(%reason, "Favorites payload is corrupt, starting empty");
                if let Err(e) = store.preserve_corrupt() {
                    tracing::error!(error = %e, "Failed to preserve corrupt favorites payload");
                }
                let manager = Self {
                    store,
                    favorites: Vec::new(),
                };
                Ok((manager, Some(DbError::CorruptStore(reason))))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The full collection in insertion order
    #[must_use]
    pub fn favorites(&self) -> &[TaggedPhrase] {
        &self.favorites
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    #[must_use]
    pub fn contains(&self, frase: &str) -> bool {
        self.favorites.iter().any(|f| f.frase == frase)
    }

    pub const fn store(&self) -> &PersistenceStore<S> {
        &self.store
    }

    /// Append `phrase` unless an entry with the same text exists
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError::Db` if the store rejects the write; the
    /// collection is left unchanged in that case.
    pub fn add(&mut self, phrase: &TaggedPhrase) -> Result<AddOutcome> {
        if self.contains(&phrase.frase) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        let mut updated = self.favorites.clone();
        updated.push(phrase.clone());
        self.commit(updated)?;
        Ok(AddOutcome::Added)
    }

    /// Remove the entry at `index` in the full collection
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for an invalid index, or `Db` if the write fails.
    pub fn remove(&mut self, index: usize) -> Result<TaggedPhrase> {
        if index >= self.favorites.len() {
            return Err(FavoritesError::IndexOutOfRange {
                index,
                len: self.favorites.len(),
            });
        }

        let mut updated = self.favorites.clone();
        let removed = updated.remove(index);
        self.commit(updated)?;
        Ok(removed)
    }

    /// Remove the entry at `index` in the list visible under `query`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is past the visible list, or `Db`
    /// if the write fails.
    pub fn remove_visible(&mut self, query: &str, index: usize) -> Result<TaggedPhrase> {
        let raw = self
            .resolve_visible(query, index)
            .ok_or_else(|| FavoritesError::IndexOutOfRange {
                index,
                len: self.search(query).count(),
            })?;
        self.remove(raw)
    }

    /// Map a position in the visible list to a position in the full collection
    #[must_use]
    pub fn resolve_visible(&self, query: &str, index: usize) -> Option<usize> {
        self.search_indexed(query).nth(index).map(|(raw, _)| raw)
    }

    /// Entries whose `frase` or `autor` contains `query`, ignoring case
    ///
    /// An empty query yields the whole collection. The iterator borrows the
    /// collection and can be recreated at will.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a TaggedPhrase> + 'a {
        self.search_indexed(query).map(|(_, f)| f)
    }

    /// Like [`search`](Self::search), paired with each entry's index in the full collection
    pub fn search_indexed<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (usize, &'a TaggedPhrase)> + 'a {
        let needle = query.to_lowercase();
        self.favorites
            .iter()
            .enumerate()
            .filter(move |(_, f)| needle.is_empty() || f.matches_lowercase(&needle))
    }

    fn commit(&mut self, updated: Vec<TaggedPhrase>) -> Result<()> {
        self.store.save(&updated)?;
        self.favorites = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{CORRUPT_KEY, FAVORITES_KEY, MemoryStore, corrupt_key};
    use crate::phrases::{Phrase, categorize};

    fn phrase(frase: &str, autor: &str) -> TaggedPhrase {
        categorize(Phrase::new(frase, autor))
    }

    fn manager() -> (FavoritesManager<MemoryStore>, MemoryStore) {
        let memory = MemoryStore::new();
        let manager = FavoritesManager::load(PersistenceStore::new(memory.clone())).unwrap();
        (manager, memory)
    }

    fn persisted(memory: &MemoryStore) -> Vec<TaggedPhrase> {
        PersistenceStore::new(memory.clone()).load().unwrap()
    }

    #[test]
    fn test_load_empty_store() {
        let (manager, _) = manager();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let (mut manager, memory) = manager();
        let p = phrase("Deus é amor", "João 4:8");

        assert_eq!(manager.add(&p).unwrap(), AddOutcome::Added);
        assert_eq!(manager.favorites(), &[p.clone()]);
        assert_eq!(persisted(&memory), vec![p]);
    }

    #[test]
    fn test_add_duplicate_is_idempotent() {
        let (mut manager, _) = manager();
        let p = phrase("Deus é amor", "João 4:8");

        manager.add(&p).unwrap();
        let outcome = manager.add(&p).unwrap();

        assert_eq!(outcome, AddOutcome::AlreadyPresent);
        assert_eq!(outcome.as_str(), "already-present");
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_duplicate_identity_is_frase_text_only() {
        let (mut manager, _) = manager();
        manager.add(&phrase("Deus é amor", "João 4:8")).unwrap();

        let outcome = manager.add(&phrase("Deus é amor", "Outro autor")).unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyPresent);
    }

    #[test]
    fn test_duplicate_does_not_write() {
        let (mut manager, memory) = manager();
        let p = phrase("Deus é amor", "João 4:8");
        manager.add(&p).unwrap();

        memory.reject_writes(true);
        assert_eq!(manager.add(&p).unwrap(), AddOutcome::AlreadyPresent);
    }

    #[test]
    fn test_add_then_remove() {
        let (mut manager, memory) = manager();
        let p = phrase("Deus é amor", "João 4:8");

        manager.add(&p).unwrap();
        let removed = manager.remove(0).unwrap();

        assert_eq!(removed, p);
        assert!(manager.is_empty());
        assert!(persisted(&memory).is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let (mut manager, _) = manager();
        manager.add(&phrase("Um", "A")).unwrap();

        let result = manager.remove(3);
        assert!(matches!(
            result,
            Err(FavoritesError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_failed_write_leaves_collection_unchanged() {
        let (mut manager, memory) = manager();
        manager.add(&phrase("Um", "A")).unwrap();

        memory.reject_writes(true);
        assert!(matches!(
            manager.add(&phrase("Dois", "B")),
            Err(FavoritesError::Db(DbError::Unavailable(_)))
        ));
        assert!(manager.remove(0).is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_search_empty_query_returns_all_in_order() {
        let (mut manager, _) = manager();
        for (f, a) in [("Um", "A"), ("Dois", "B"), ("Três", "C")] {
            manager.add(&phrase(f, a)).unwrap();
        }

        let all: Vec<&str> = manager.search("").map(|f| f.frase.as_str()).collect();
        assert_eq!(all, vec!["Um", "Dois", "Três"]);
    }

    #[test]
    fn test_search_matches_frase_or_autor_ignoring_case() {
        let (mut manager, _) = manager();
        manager.add(&phrase("Deus é amor", "João 4:8")).unwrap();
        manager.add(&phrase("Tenha coragem", "Autor desconhecido")).unwrap();
        manager.add(&phrase("A paz começa com um sorriso", "Madre Teresa")).unwrap();

        let by_frase: Vec<&str> = manager.search("DEUS").map(|f| f.frase.as_str()).collect();
        assert_eq!(by_frase, vec!["Deus é amor"]);

        let by_autor: Vec<&str> = manager.search("teresa").map(|f| f.frase.as_str()).collect();
        assert_eq!(by_autor, vec!["A paz começa com um sorriso"]);

        assert_eq!(manager.search("nada disso").count(), 0);
    }

    #[test]
    fn test_search_is_restartable() {
        let (mut manager, _) = manager();
        manager.add(&phrase("Um", "A")).unwrap();

        assert_eq!(manager.search("um").count(), 1);
        assert_eq!(manager.search("um").count(), 1);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_remove_visible_resolves_against_filtered_list() {
        let (mut manager, _) = manager();
        manager.add(&phrase("Deus é amor", "João 4:8")).unwrap();
        manager.add(&phrase("Tenha coragem", "Autor desconhecido")).unwrap();
        manager.add(&phrase("Coragem sempre", "Autor desconhecido")).unwrap();

        let removed = manager.remove_visible("coragem", 1).unwrap();

        assert_eq!(removed.frase, "Coragem sempre");
        let left: Vec<&str> = manager.search("").map(|f| f.frase.as_str()).collect();
        assert_eq!(left, vec!["Deus é amor", "Tenha coragem"]);
    }

    #[test]
    fn test_remove_visible_out_of_range() {
        let (mut manager, _) = manager();
        manager.add(&phrase("Deus é amor", "João 4:8")).unwrap();
        manager.add(&phrase("Tenha coragem", "Autor desconhecido")).unwrap();

        let result = manager.remove_visible("coragem", 1);
        assert!(matches!(
            result,
            Err(FavoritesError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_load_corrupt_fails() {
        let memory = MemoryStore::new();
        memory.set(FAVORITES_KEY, b"not json").unwrap();

        let result = FavoritesManager::load(PersistenceStore::new(memory));
        assert!(matches!(
            result,
            Err(FavoritesError::Db(DbError::CorruptStore(_)))
        ));
    }

    #[test]
    fn test_load_or_recover_preserves_corrupt_payload() {
        let memory = MemoryStore::new();
        memory.set(FAVORITES_KEY, b"not json").unwrap();

        let (manager, error) =
            FavoritesManager::load_or_recover(PersistenceStore::new(memory.clone())).unwrap();

        assert!(manager.is_empty());
        assert!(matches!(error, Some(DbError::CorruptStore(_))));
        assert_eq!(memory.get(FAVORITES_KEY).unwrap(), Some(b"not json".to_vec()));
        assert_eq!(memory.get(CORRUPT_KEY).unwrap(), Some(b"not json".to_vec()));
    }

    #[test]
    fn test_second_corruption_is_preserved_too() {
        let memory = MemoryStore::new();
        memory.set(FAVORITES_KEY, b"first corrupt").unwrap();
        let (mut manager, _) =
            FavoritesManager::load_or_recover(PersistenceStore::new(memory.clone())).unwrap();
        manager.add(&phrase("Um", "A")).unwrap();

        memory.set(FAVORITES_KEY, b"second corrupt").unwrap();
        let (mut manager, error) =
            FavoritesManager::load_or_recover(PersistenceStore::new(memory.clone())).unwrap();
        assert!(error.is_some());
        manager.add(&phrase("Dois", "B")).unwrap();

        assert_eq!(persisted(&memory), vec![phrase("Dois", "B")]);
        assert_eq!(memory.get(CORRUPT_KEY).unwrap(), Some(b"first corrupt".to_vec()));
        assert_eq!(memory.get(&corrupt_key(1)).unwrap(), Some(b"second corrupt".to_vec()));
    }

    #[test]
    fn test_recover_when_corrupt_copy_cannot_be_written() {
        let memory = MemoryStore::new();
        memory.set(FAVORITES_KEY, b"not json").unwrap();
        memory.reject_writes(true);

        let (manager, error) =
            FavoritesManager::load_or_recover(PersistenceStore::new(memory.clone())).unwrap();

        assert!(manager.is_empty());
        assert!(matches!(error, Some(DbError::CorruptStore(_))));
        assert_eq!(memory.get(CORRUPT_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_existing_favorites() {
        let memory = MemoryStore::new();
        let saved = vec![phrase("Um", "A"), phrase("Dois", "B")];
        PersistenceStore::new(memory.clone()).save(&saved).unwrap();

        let manager = FavoritesManager::load(PersistenceStore::new(memory)).unwrap();
        assert_eq!(manager.favorites(), saved.as_slice());
    }
}
