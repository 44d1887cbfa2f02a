//! Course records and their repository.
//!
//! A course always belongs to one institution. Adding a course under an
//! institution id that does not exist is rejected by the foreign key and
//! reported as [`TrackerError::Integrity`].

use crate::db::db::Db;
use crate::db::error::{Entity, TrackerError, TrackerResult};
use crate::db::validate::{optional_text, replacement_text, require_text};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use tracing::debug;

const INSERT_COURSE: &str = "INSERT INTO courses (institution_id, name, description, duration) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_COURSE: &str = "UPDATE courses SET name = ?2, description = ?3, duration = ?4 WHERE id = ?1";
const DELETE_COURSE: &str = "DELETE FROM courses WHERE id = ?1";
const SELECT_COURSE_BY_ID: &str = "SELECT id, institution_id, name, description, duration FROM courses WHERE id = ?1";
const SELECT_COURSES_BY_INSTITUTION: &str = "
    SELECT id, institution_id, name, description, duration FROM courses
    WHERE institution_id = ?1
    ORDER BY name, id
";
const SELECT_ALL_COURSES: &str = "
    SELECT c.id, c.institution_id, c.name, c.description, c.duration FROM courses c
    JOIN institutions i ON i.id = c.institution_id
    ORDER BY i.name, i.id, c.name, c.id
";
const COUNT_COURSES: &str = "SELECT COUNT(*) FROM courses";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub institution_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Free-form label such as "6 months".
    pub duration: Option<String>,
}

impl Course {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Course {
            id: row.get(0)?,
            institution_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            duration: row.get(4)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCourse {
    pub institution_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<String>,
}

impl NewCourse {
    pub fn new(institution_id: i64, name: impl Into<String>) -> Self {
        Self {
            institution_id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

/// Partial update: `Some` replaces a field, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
}

impl CourseUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&self, current: &mut Course) -> TrackerResult<()> {
        if let Some(name) = replacement_text("name", self.name.as_deref())? {
            current.name = name;
        }
        if let Some(description) = replacement_text("description", self.description.as_deref())? {
            current.description = Some(description);
        }
        if let Some(duration) = replacement_text("duration", self.duration.as_deref())? {
            current.duration = Some(duration);
        }
        Ok(())
    }
}

pub(crate) fn insert(conn: &Connection, new: &NewCourse) -> TrackerResult<Course> {
    let course = Course {
        id: 0,
        institution_id: new.institution_id,
        name: require_text("name", &new.name)?,
        description: optional_text(new.description.as_deref()),
        duration: optional_text(new.duration.as_deref()),
    };

    conn.execute(
        INSERT_COURSE,
        params![course.institution_id, course.name, course.description, course.duration],
    )?;
    let id = conn.last_insert_rowid();
    debug!(id, institution_id = course.institution_id, name = %course.name, "course inserted");

    Ok(Course { id, ..course })
}

pub(crate) fn find(conn: &Connection, id: i64) -> TrackerResult<Option<Course>> {
    conn.query_row(SELECT_COURSE_BY_ID, params![id], Course::from_row)
        .optional()
        .map_err(Into::into)
}

pub struct Courses<'a> {
    db: &'a Db,
}

impl<'a> Courses<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn add(&self, new: &NewCourse) -> TrackerResult<Course> {
        self.db.unit_of_work(|tx| insert(tx, new))
    }

    pub fn get(&self, id: i64) -> TrackerResult<Option<Course>> {
        self.db.read(|conn| find(conn, id))
    }

    /// All courses ordered by institution name, then course name.
    pub fn list(&self) -> TrackerResult<Vec<Course>> {
        self.db.read(|conn| {
            let mut stmt = conn.prepare(SELECT_ALL_COURSES)?;
            let courses = stmt.query_map([], Course::from_row)?.collect::<Result<Vec<_>, _>>()?;
            Ok(courses)
        })
    }

    pub fn list_for_institution(&self, institution_id: i64) -> TrackerResult<Vec<Course>> {
        self.db.read(|conn| {
            let mut stmt = conn.prepare(SELECT_COURSES_BY_INSTITUTION)?;
            let courses = stmt
                .query_map(params![institution_id], Course::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(courses)
        })
    }

    pub fn update(&self, id: i64, changes: &CourseUpdate) -> TrackerResult<Course> {
        self.db.unit_of_work(|tx| {
            let mut course = find(tx, id)?.ok_or_else(|| TrackerError::not_found(Entity::Course, id))?;
            changes.apply(&mut course)?;

            tx.execute(UPDATE_COURSE, params![id, course.name, course.description, course.duration])?;
            debug!(id, "course updated");
            Ok(course)
        })
    }

    /// Deletes a course together with its certifications.
    pub fn delete(&self, id: i64) -> TrackerResult<()> {
        self.db.unit_of_work(|tx| {
            let affected = tx.execute(DELETE_COURSE, params![id])?;
            if affected == 0 {
                return Err(TrackerError::not_found(Entity::Course, id));
            }
            debug!(id, "course deleted");
            Ok(())
        })
    }

    pub fn count(&self) -> TrackerResult<i64> {
        self.db.read(|conn| Ok(conn.query_row(COUNT_COURSES, [], |row| row.get(0))?))
    }
}
