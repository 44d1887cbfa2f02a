//! Versioned schema creation.
//!
//! Applied versions are recorded in a `migrations` table, so running the
//! manager on every start is safe: once the schema is current it does nothing.
//!
//! ```rust,no_run
//! use certrack::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("certrack.db")?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 1);
//! # Ok::<(), certrack::db::error::TrackerError>(())
//! ```

use crate::db::error::TrackerResult;
use rusqlite::{params, Connection, Transaction};
use tracing::{debug, error, info};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_INSTITUTIONS: &str = "CREATE TABLE IF NOT EXISTS institutions (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    location TEXT,
    year INTEGER,
    type TEXT
)";

const SCHEMA_COURSES: &str = "CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY,
    institution_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    description TEXT,
    duration TEXT,
    FOREIGN KEY (institution_id) REFERENCES institutions(id) ON DELETE CASCADE
)";

const SCHEMA_CERTIFICATIONS: &str = "CREATE TABLE IF NOT EXISTS certifications (
    id INTEGER PRIMARY KEY,
    course_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    level TEXT,
    issue_date TEXT,
    expiry_date TEXT,
    FOREIGN KEY (course_id) REFERENCES courses(id) ON DELETE CASCADE
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> TrackerResult<()>,
}

/// Registry of schema versions, applied in order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the three entity tables and their foreign key indices
        self.add_migration(1, "create_tracker_tables", |tx| {
            tx.execute(SCHEMA_INSTITUTIONS, [])?;
            tx.execute(SCHEMA_COURSES, [])?;
            tx.execute(SCHEMA_CERTIFICATIONS, [])?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_institutions_name ON institutions(name)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_courses_institution_id ON courses(institution_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_certifications_course_id ON certifications(course_id)", [])?;
            // Expiry overview scans by date
            tx.execute("CREATE INDEX IF NOT EXISTS idx_certifications_expiry_date ON certifications(expiry_date)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> TrackerResult<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applies every pending migration inside a single transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> TrackerResult<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            debug!(version = current_version, "database is up to date");
            return Ok(());
        }

        info!(count = pending.len(), "applying pending migrations");

        let tx = conn.transaction()?;

        for migration in pending {
            debug!(version = migration.version, name = migration.name, "running migration");

            if let Err(e) = (migration.up)(&tx) {
                error!(version = migration.version, error = %e, "migration failed");
                return Err(e);
            }

            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }

        tx.commit()?;
        info!(version = self.latest_version(), "migrations completed");

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> TrackerResult<u32> {
        // MAX over an empty table is NULL
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    /// Applied migrations as `(version, name, applied_at)`, ordered by version.
    pub fn get_migration_history(&self, conn: &Connection) -> TrackerResult<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> TrackerResult<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> TrackerResult<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> TrackerResult<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
