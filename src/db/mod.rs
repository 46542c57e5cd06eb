//! Durable storage for the favorites collection
//!
//! Two layers:
//! - [`KeyValueStore`]: byte-level get/set under a string key. [`Database`]
//!   implements it on top of sled, [`MemoryStore`] keeps everything in memory.
//! - [`PersistenceStore`]: reads and writes the whole favorites collection as
//!   one JSON array under [`FAVORITES_KEY`]. Every save replaces the document.

use crate::phrases::TaggedPhrase;
use sled::Db;
use std::path::Path;

pub mod error;
pub mod memory;

pub use error::DbError;
pub use memory::MemoryStore;

/// Key holding the serialized favorites collection
pub const FAVORITES_KEY: &str = "almaLuxFavorites";

/// Key receiving a copy of an undecodable favorites payload
pub const CORRUPT_KEY: &str = "almaLuxFavorites.corrupt";

/// Byte-level key-value store that survives process restarts
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DbError>;

    /// Replace the value under `key`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be written.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), DbError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DbError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), DbError> {
        (**self).set(key, value)
    }
}

/// sled-backed key-value store
pub struct Database {
    db: Db,
}

impl Database {
    /// Opens or creates a database at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use alma_lux::db::Database;
    /// let db = Database::open("favorites_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Opened favorites database");
        Ok(Self { db })
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DbError> {
        Ok(self.db.get(key)?.map(|value| value.to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), DbError> {
        self.db.insert(key, value)?;
        self.db.flush()?;
        Ok(())
    }
}

/// Whole-document persistence of the favorites collection
#[derive(Debug, Clone)]
pub struct PersistenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying key-value store
    pub const fn inner(&self) -> &S {
        &self.store
    }

    /// Read the persisted favorites
    ///
    /// An absent key or an empty payload yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `DbError::CorruptStore` if the payload is not a JSON array of
    /// tagged phrases, or any backend read error.
    pub fn load(&self) -> Result<Vec<TaggedPhrase>, DbError> {
        let Some(bytes) = self.store.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| DbError::CorruptStore(e.to_string()))
    }

    /// Replace the persisted favorites with `favorites`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if encoding or the backend write fails.
    pub fn save(&self, favorites: &[TaggedPhrase]) -> Result<(), DbError> {
        let bytes =
            serde_json::to_vec(favorites).map_err(|e| DbError::SerializeError(e.to_string()))?;
        self.store.set(FAVORITES_KEY, &bytes)?;
        tracing::debug!(count = favorites.len(), "Saved favorites");
        Ok(())
    }

    /// Copy the current favorites payload aside
    ///
    /// The first corrupt payload goes to [`CORRUPT_KEY`], later distinct ones to
    /// `CORRUPT_KEY.1`, `CORRUPT_KEY.2` and so on. A payload already kept under
    /// one of those keys is not copied again. Returns the key written, if any.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be read or written.
    pub fn preserve_corrupt(&self) -> Result<Option<String>, DbError> {
        let Some(bytes) = self.store.get(FAVORITES_KEY)? else {
            return Ok(None);
        };

        for n in 0usize.. {
            let key = corrupt_key(n);
            match self.store.get(&key)? {
                Some(kept) if kept == bytes => return Ok(None),
                Some(_) => {}
                None => {
                    self.store.set(&key, &bytes)?;
                    tracing::warn!(%key, "Preserved corrupt favorites payload");
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// Key for the `n`th preserved corrupt payload
#[must_use]
pub fn corrupt_key(n: usize) -> String {
    if n == 0 {
        CORRUPT_KEY.to_string()
    } else {
        format!("{CORRUPT_KEY}.{n}")
    }
}
