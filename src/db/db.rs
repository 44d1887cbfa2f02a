//! Storage handle and unit of work.
//!
//! [`Db`] is created once at process start and passed by reference into every
//! repository. It only remembers where the database file lives; each logical
//! operation opens its own connection through [`Db::session`] and drops it
//! before returning, so no connection outlives an operation or is held across
//! a prompt.

use crate::db::error::TrackerResult;
use crate::db::migrations::{get_db_version, init_with_migrations};
use rusqlite::{Connection, Transaction};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

pub const DB_FILE_NAME: &str = "certrack.db";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    /// Opens (creating if needed) the database at `path` and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> TrackerResult<Db> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let db = Db { path };
        db.initialize()?;
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Idempotent schema creation; a no-op when the schema is current.
    pub fn initialize(&self) -> TrackerResult<()> {
        let mut conn = self.session()?;
        init_with_migrations(&mut conn)
    }

    pub fn schema_version(&self) -> TrackerResult<u32> {
        self.read(|conn| get_db_version(conn))
    }

    /// Opens a connection scoped to one logical operation.
    ///
    /// Foreign keys are enforced per connection in SQLite, so every session
    /// turns them on before it is handed out.
    pub fn session(&self) -> TrackerResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Runs a read-only closure on a fresh session.
    pub fn read<T, F>(&self, f: F) -> TrackerResult<T>
    where
        F: FnOnce(&Connection) -> TrackerResult<T>,
    {
        let conn = self.session()?;
        f(&conn)
    }

    /// Runs `f` inside a transaction: commits on `Ok`, rolls back on `Err`.
    ///
    /// The error from `f` is returned unchanged after the rollback.
    pub fn unit_of_work<T, F>(&self, f: F) -> TrackerResult<T>
    where
        F: FnOnce(&Transaction) -> TrackerResult<T>,
    {
        let mut conn = self.session()?;
        let tx = conn.transaction()?;

        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                debug!("unit of work committed");
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "unit of work rolled back");
                if let Err(rollback_err) = tx.rollback() {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::error::TrackerError;

    #[test]
    fn failed_unit_of_work_leaves_no_rows() {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::open(dir.path().join("uow.db")).unwrap();

        let result: TrackerResult<()> = db.unit_of_work(|tx| {
            tx.execute("INSERT INTO institutions (name) VALUES ('Half written')", [])?;
            Err(TrackerError::validation("abort"))
        });
        assert!(matches!(result, Err(TrackerError::Validation(_))));

        let count: i64 = db
            .read(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM institutions", [], |row| row.get(0))?))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn open_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join(DB_FILE_NAME);
        let db = Db::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(db.path(), path.as_path());
    }

    #[test]
    fn sessions_enforce_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::open(dir.path().join("fk.db")).unwrap();
        let enabled: bool = db
            .read(|conn| Ok(conn.pragma_query_value(None, "foreign_keys", |row| row.get(0))?))
            .unwrap();
        assert!(enabled);
    }
}
