//! SQLite connection ownership for the breed catalog.
//! Opens the store file, verifies it is reachable and creates the `dogs` table.

use super::repository::SqliteBreedRepository;
use super::DbConn;
use crate::error::StoreError;
use log::{debug, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Handle owning the single connection to the breed store.
///
/// Built explicitly by the caller and passed around; repositories obtained
/// through [`Database::breed_repo`] share the same connection.
pub struct Database {
    conn: DbConn,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the store file at `path`, creating its parent directory first.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Connection(format!(
                    "cannot create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(path).map_err(|e| {
            StoreError::Connection(format!("cannot open {}: {}", path.display(), e))
        })?;
        debug!("Opened breed store at {}", path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path.to_path_buf()),
        })
    }

    /// Create an in-memory store (useful for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    /// Verify the store answers a trivial query.
    pub fn connect(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(())
    }

    /// Create the `dogs` table if it does not exist yet. Existing rows are kept.
    pub fn sync(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS dogs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                origin TEXT NOT NULL,
                image TEXT NOT NULL DEFAULT '/images/test.jpg',
                description TEXT NOT NULL,
                year INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_dogs_title ON dogs(title);
            "#,
        )
        .map_err(|e| StoreError::Connection(format!("cannot sync schema: {}", e)))?;
        info!("Breed store schema ready");
        Ok(())
    }

    pub fn connection(&self) -> DbConn {
        self.conn.clone()
    }

    pub fn breed_repo(&self) -> SqliteBreedRepository {
        SqliteBreedRepository::new(self.connection())
    }

    /// Backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection. When repositories still hold it, it is released
    /// once the last of them is dropped.
    pub fn close(self) -> Result<(), StoreError> {
        match Arc::try_unwrap(self.conn) {
            Ok(mutex) => {
                let conn = mutex.into_inner().map_err(|_| StoreError::LockPoisoned)?;
                conn.close().map_err(|(_, e)| StoreError::Connection(e.to_string()))?;
                debug!("Closed breed store");
                Ok(())
            }
            Err(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(db: &Database) -> bool {
        let conn = db.connection();
        let conn = conn.lock().unwrap();
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'dogs'",
            [],
            |row| row.get::<_, i64>(0),
        )
        .unwrap()
            == 1
    }

    #[test]
    fn in_memory_store_connects_and_syncs() {
        let db = Database::open_in_memory().unwrap();
        db.connect().unwrap();
        assert!(!table_exists(&db));

        db.sync().unwrap();
        assert!(table_exists(&db));
        assert!(db.path().is_none());
    }

    #[test]
    fn open_at_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("dogbreeds.sqlite");

        let db = Database::open_at(&path).unwrap();
        db.connect().unwrap();
        db.sync().unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert!(path.exists());
        assert_eq!(db.path(), Some(path.as_path()));
        db.close().unwrap();
    }

    #[test]
    fn open_at_fails_with_connection_error_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = Database::open_at(blocker.join("dogbreeds.sqlite"))
            .err()
            .expect("opening under a file must fail");
        assert!(matches!(err, StoreError::Connection(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn close_with_live_repository_is_deferred() {
        let db = Database::open_in_memory().unwrap();
        db.sync().unwrap();
        let repo = db.breed_repo();
        db.close().unwrap();
        drop(repo);
    }
}
