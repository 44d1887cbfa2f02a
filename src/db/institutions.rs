//! Institution records and their repository.
//!
//! Deleting an institution removes its courses and, through them, their
//! certifications; the cascade is declared on the foreign keys.
//!
//! ```rust,no_run
//! use certrack::db::db::Db;
//! use certrack::db::institutions::{InstitutionUpdate, Institutions, NewInstitution};
//!
//! let db = Db::open("certrack.db")?;
//! let institutions = Institutions::new(&db);
//! let school = institutions.add(&NewInstitution::new("Moringa School").location("Nairobi"))?;
//! institutions.update(school.id, &InstitutionUpdate { year: Some(2014), ..Default::default() })?;
//! # Ok::<(), certrack::db::error::TrackerError>(())
//! ```

use crate::db::db::Db;
use crate::db::error::{Entity, TrackerError, TrackerResult};
use crate::db::validate::{optional_text, replacement_text, require_text, validate_year};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use tracing::debug;

const INSERT_INSTITUTION: &str = "INSERT INTO institutions (name, location, year, type) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_INSTITUTION: &str = "UPDATE institutions SET name = ?2, location = ?3, year = ?4, type = ?5 WHERE id = ?1";
const DELETE_INSTITUTION: &str = "DELETE FROM institutions WHERE id = ?1";
const SELECT_ALL_INSTITUTIONS: &str = "SELECT id, name, location, year, type FROM institutions ORDER BY name, id";
const SELECT_INSTITUTION_BY_ID: &str = "SELECT id, name, location, year, type FROM institutions WHERE id = ?1";
const COUNT_INSTITUTIONS: &str = "SELECT COUNT(*) FROM institutions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    /// Founding year.
    pub year: Option<i32>,
    /// Category such as "Bootcamp" or "University".
    pub kind: Option<String>,
}

impl Institution {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Institution {
            id: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
            year: row.get(3)?,
            kind: row.get(4)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInstitution {
    pub name: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub kind: Option<String>,
}

impl NewInstitution {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Partial update: `Some` replaces a field, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub kind: Option<String>,
}

impl InstitutionUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&self, current: &mut Institution) -> TrackerResult<()> {
        if let Some(name) = replacement_text("name", self.name.as_deref())? {
            current.name = name;
        }
        if let Some(location) = replacement_text("location", self.location.as_deref())? {
            current.location = Some(location);
        }
        if let Some(year) = validate_year(self.year)? {
            current.year = Some(year);
        }
        if let Some(kind) = replacement_text("type", self.kind.as_deref())? {
            current.kind = Some(kind);
        }
        Ok(())
    }
}

pub(crate) fn insert(conn: &Connection, new: &NewInstitution) -> TrackerResult<Institution> {
    let institution = Institution {
        id: 0,
        name: require_text("name", &new.name)?,
        location: optional_text(new.location.as_deref()),
        year: validate_year(new.year)?,
        kind: optional_text(new.kind.as_deref()),
    };

    conn.execute(
        INSERT_INSTITUTION,
        params![institution.name, institution.location, institution.year, institution.kind],
    )?;
    let id = conn.last_insert_rowid();
    debug!(id, name = %institution.name, "institution inserted");

    Ok(Institution { id, ..institution })
}

pub(crate) fn find(conn: &Connection, id: i64) -> TrackerResult<Option<Institution>> {
    conn.query_row(SELECT_INSTITUTION_BY_ID, params![id], Institution::from_row)
        .optional()
        .map_err(Into::into)
}

pub struct Institutions<'a> {
    db: &'a Db,
}

impl<'a> Institutions<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Creates an institution; the name must not be blank.
    pub fn add(&self, new: &NewInstitution) -> TrackerResult<Institution> {
        self.db.unit_of_work(|tx| insert(tx, new))
    }

    /// Looks an institution up by id; a missing id is `Ok(None)`.
    pub fn get(&self, id: i64) -> TrackerResult<Option<Institution>> {
        self.db.read(|conn| find(conn, id))
    }

    /// All institutions ordered by name.
    pub fn list(&self) -> TrackerResult<Vec<Institution>> {
        self.db.read(|conn| {
            let mut stmt = conn.prepare(SELECT_ALL_INSTITUTIONS)?;
            let institutions = stmt.query_map([], Institution::from_row)?.collect::<Result<Vec<_>, _>>()?;
            Ok(institutions)
        })
    }

    pub fn update(&self, id: i64, changes: &InstitutionUpdate) -> TrackerResult<Institution> {
        self.db.unit_of_work(|tx| {
            let mut institution = find(tx, id)?.ok_or_else(|| TrackerError::not_found(Entity::Institution, id))?;
            changes.apply(&mut institution)?;

            tx.execute(
                UPDATE_INSTITUTION,
                params![id, institution.name, institution.location, institution.year, institution.kind],
            )?;
            debug!(id, "institution updated");
            Ok(institution)
        })
    }

    /// Deletes an institution together with its courses and certifications.
    pub fn delete(&self, id: i64) -> TrackerResult<()> {
        self.db.unit_of_work(|tx| {
            let affected = tx.execute(DELETE_INSTITUTION, params![id])?;
            if affected == 0 {
                return Err(TrackerError::not_found(Entity::Institution, id));
            }
            debug!(id, "institution deleted");
            Ok(())
        })
    }

    pub fn count(&self) -> TrackerResult<i64> {
        self.db.read(|conn| count(conn))
    }
}

pub(crate) fn count(conn: &Connection) -> TrackerResult<i64> {
    Ok(conn.query_row(COUNT_INSTITUTIONS, [], |row| row.get(0))?)
}
