use std::path::{Path, PathBuf};

use northwind::adapter::outbound::sqlite::SqliteCatalogStore;
use northwind::application::seed::seed;
use northwind::infrastructure::bootstrap::open_store;
use tempfile::TempDir;

/// Temporary SQLite database for integration tests, removed on drop.
pub struct TempDb {
    store: SqliteCatalogStore,
    path: PathBuf,
    _dir: TempDir,
}

impl TempDb {
    /// A migrated, empty database.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("northwind.db");
        let store = open_store(&path.display().to_string()).expect("open sqlite store");
        Self {
            store,
            path,
            _dir: dir,
        }
    }

    /// A migrated database holding the demo catalog.
    pub fn seeded() -> Self {
        let db = Self::empty();
        seed(&db.store).expect("seed demo catalog");
        db
    }

    pub fn store(&self) -> &SqliteCatalogStore {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A second store over the same file, as a later process would see it.
    pub fn reopen(&self) -> SqliteCatalogStore {
        open_store(&self.path.display().to_string()).expect("reopen sqlite store")
    }
}
