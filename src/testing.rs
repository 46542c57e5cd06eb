//! Testing utilities
//!
//! Only available when compiled with `cfg(test)`.

use crate::db::Database;
use tempfile::TempDir;

/// Wrapper for a temporary sled database that is removed on drop
///
/// # Examples
/// ```ignore
/// let test_db = TestDb::new();
/// let store = PersistenceStore::new(test_db.db());
/// store.save(&[]).unwrap();
/// // Directory removed when test_db is dropped
/// ```
pub struct TestDb {
    // Field order matters: the database must close before its directory goes.
    db: Database,
    _dir: TempDir,
}

impl TestDb {
    /// Create a fresh, empty database in a temporary directory
    ///
    /// # Panics
    /// Panics if the directory or database cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db =
            Database::open(dir.path().join("favorites")).expect("Failed to open test database");
        Self { db, _dir: dir }
    }

    /// Get a reference to the underlying database
    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}
