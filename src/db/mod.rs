//! Database layer for certrack.
//!
//! A SQLite file holds three tables linked by foreign keys with cascading
//! deletes: `institutions` → `courses` → `certifications`.
//!
//! ```rust,no_run
//! use certrack::db::{courses::{Courses, NewCourse}, db::Db, institutions::{Institutions, NewInstitution}};
//!
//! let db = Db::open("certrack.db")?;
//! let school = Institutions::new(&db).add(&NewInstitution::new("Moringa School"))?;
//! Courses::new(&db).add(&NewCourse::new(school.id, "Data Science"))?;
//! # Ok::<(), certrack::db::error::TrackerError>(())
//! ```

/// Storage handle, sessions and the unit of work.
pub mod db;

/// Error taxonomy shared by every core operation.
pub mod error;

/// Idempotent, versioned schema creation.
pub mod migrations;

/// Field checks applied before writes.
pub mod validate;

pub mod certifications;
pub mod courses;
pub mod institutions;

/// By-institution and expiry overview reports.
pub mod reports;

/// Sample data for first runs.
pub mod seed;
