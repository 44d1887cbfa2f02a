//! Error taxonomy for the storage and repository layer.
//!
//! Every core operation returns [`TrackerResult`]. The variants map one to one
//! onto the failures a caller has to tell apart:
//!
//! - [`TrackerError::Validation`]: bad input shape (blank required field, malformed date)
//! - [`TrackerError::NotFound`]: the referenced id does not exist
//! - [`TrackerError::Integrity`]: a constraint was violated at the storage boundary
//!
//! Anything else SQLite reports is carried as [`TrackerError::Database`].

use rusqlite::ErrorCode;
use std::fmt;

/// The entity kinds the tracker stores, used to label `NotFound` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Institution,
    Course,
    Certification,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Institution => "Institution",
            Entity::Course => "Course",
            Entity::Certification => "Certification",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    pub fn validation(message: impl Into<String>) -> Self {
        TrackerError::Validation(message.into())
    }

    pub fn not_found(entity: Entity, id: i64) -> Self {
        TrackerError::NotFound { entity, id }
    }

    /// Errors the interactive layer reports and recovers from.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            TrackerError::Validation(_) | TrackerError::NotFound { .. } | TrackerError::Integrity(_)
        )
    }
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref message) if failure.code == ErrorCode::ConstraintViolation => {
                let detail = message.clone().unwrap_or_else(|| failure.to_string());
                TrackerError::Integrity(detail)
            }
            other => TrackerError::Database(other),
        }
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_failures_map_to_integrity() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY),
            Some("FOREIGN KEY constraint failed".to_string()),
        );
        match TrackerError::from(err) {
            TrackerError::Integrity(detail) => assert!(detail.contains("FOREIGN KEY")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn other_sqlite_errors_stay_database_errors() {
        let err = TrackerError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, TrackerError::Database(_)));
        assert!(!err.is_user_facing());
    }
}
