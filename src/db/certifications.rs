//! Certification records and their repository.
//!
//! Issue and expiry dates are stored as ISO `YYYY-MM-DD` text and come back
//! as the same calendar dates. A certification's status is never stored; see
//! [`Certification::status`].

use crate::db::db::Db;
use crate::db::error::{Entity, TrackerError, TrackerResult};
use crate::db::validate::{optional_text, replacement_text, require_text};
use crate::libs::status::{self, CertificationStatus};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use tracing::debug;

const INSERT_CERTIFICATION: &str =
    "INSERT INTO certifications (course_id, title, level, issue_date, expiry_date) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_CERTIFICATION: &str =
    "UPDATE certifications SET title = ?2, level = ?3, issue_date = ?4, expiry_date = ?5 WHERE id = ?1";
const DELETE_CERTIFICATION: &str = "DELETE FROM certifications WHERE id = ?1";
const SELECT_CERTIFICATION_BY_ID: &str =
    "SELECT id, course_id, title, level, issue_date, expiry_date FROM certifications WHERE id = ?1";
const SELECT_CERTIFICATIONS_BY_COURSE: &str = "
    SELECT id, course_id, title, level, issue_date, expiry_date FROM certifications
    WHERE course_id = ?1
    ORDER BY title, id
";
const SELECT_DETAILS: &str = "
    SELECT cert.id, cert.course_id, cert.title, cert.level, cert.issue_date, cert.expiry_date,
           c.name, i.name
    FROM certifications cert
    JOIN courses c ON c.id = cert.course_id
    JOIN institutions i ON i.id = c.institution_id
    ORDER BY i.name, i.id, c.name, c.id, cert.title, cert.id
";
// Rows without an expiry sort last. With a cutoff they drop out entirely,
// since a NULL expiry never compares <= a date.
const SELECT_DETAILS_BY_EXPIRY: &str = "
    SELECT cert.id, cert.course_id, cert.title, cert.level, cert.issue_date, cert.expiry_date,
           c.name, i.name
    FROM certifications cert
    JOIN courses c ON c.id = cert.course_id
    JOIN institutions i ON i.id = c.institution_id
    WHERE ?1 IS NULL OR cert.expiry_date <= ?1
    ORDER BY cert.expiry_date IS NULL, cert.expiry_date, cert.id
";
const COUNT_CERTIFICATIONS: &str = "SELECT COUNT(*) FROM certifications";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub level: Option<String>,
    pub issue_date: Option<NaiveDate>,
    /// `None` means the certification does not expire.
    pub expiry_date: Option<NaiveDate>,
}

impl Certification {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Certification {
            id: row.get(0)?,
            course_id: row.get(1)?,
            title: row.get(2)?,
            level: row.get(3)?,
            issue_date: row.get(4)?,
            expiry_date: row.get(5)?,
        })
    }

    pub fn status(&self, today: NaiveDate) -> CertificationStatus {
        CertificationStatus::classify(self.expiry_date, today)
    }

    pub fn days_to_expiry(&self, today: NaiveDate) -> Option<i64> {
        status::days_to_expiry(self.expiry_date, today)
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        status::is_expired(self.expiry_date, today)
    }
}

/// A certification with the names of its owning course and institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationDetail {
    pub certification: Certification,
    pub course_name: String,
    pub institution_name: String,
}

impl CertificationDetail {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(CertificationDetail {
            certification: Certification::from_row(row)?,
            course_name: row.get(6)?,
            institution_name: row.get(7)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCertification {
    pub course_id: i64,
    pub title: String,
    pub level: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

impl NewCertification {
    pub fn new(course_id: i64, title: impl Into<String>) -> Self {
        Self {
            course_id,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn issued(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn expires(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }
}

/// Partial update.
///
/// Text fields follow the usual rule (`None` keeps). The dates are doubly
/// optional: `None` keeps, `Some(None)` clears, `Some(Some(date))` replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationUpdate {
    pub title: Option<String>,
    pub level: Option<String>,
    pub issue_date: Option<Option<NaiveDate>>,
    pub expiry_date: Option<Option<NaiveDate>>,
}

impl CertificationUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&self, current: &mut Certification) -> TrackerResult<()> {
        if let Some(title) = replacement_text("title", self.title.as_deref())? {
            current.title = title;
        }
        if let Some(level) = replacement_text("level", self.level.as_deref())? {
            current.level = Some(level);
        }
        if let Some(issue_date) = self.issue_date {
            current.issue_date = issue_date;
        }
        if let Some(expiry_date) = self.expiry_date {
            current.expiry_date = expiry_date;
        }
        Ok(())
    }
}

pub(crate) fn insert(conn: &Connection, new: &NewCertification) -> TrackerResult<Certification> {
    let certification = Certification {
        id: 0,
        course_id: new.course_id,
        title: require_text("title", &new.title)?,
        level: optional_text(new.level.as_deref()),
        issue_date: new.issue_date,
        expiry_date: new.expiry_date,
    };

    conn.execute(
        INSERT_CERTIFICATION,
        params![
            certification.course_id,
            certification.title,
            certification.level,
            certification.issue_date,
            certification.expiry_date
        ],
    )?;
    let id = conn.last_insert_rowid();
    debug!(id, course_id = certification.course_id, title = %certification.title, "certification inserted");

    Ok(Certification { id, ..certification })
}

pub(crate) fn find(conn: &Connection, id: i64) -> TrackerResult<Option<Certification>> {
    conn.query_row(SELECT_CERTIFICATION_BY_ID, params![id], Certification::from_row)
        .optional()
        .map_err(Into::into)
}

pub struct Certifications<'a> {
    db: &'a Db,
}

impl<'a> Certifications<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn add(&self, new: &NewCertification) -> TrackerResult<Certification> {
        self.db.unit_of_work(|tx| insert(tx, new))
    }

    pub fn get(&self, id: i64) -> TrackerResult<Option<Certification>> {
        self.db.read(|conn| find(conn, id))
    }

    pub fn list_for_course(&self, course_id: i64) -> TrackerResult<Vec<Certification>> {
        self.db.read(|conn| {
            let mut stmt = conn.prepare(SELECT_CERTIFICATIONS_BY_COURSE)?;
            let certifications = stmt
                .query_map(params![course_id], Certification::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(certifications)
        })
    }

    /// Every certification with context, ordered by institution, course and title.
    pub fn list_details(&self) -> TrackerResult<Vec<CertificationDetail>> {
        self.db.read(|conn| {
            let mut stmt = conn.prepare(SELECT_DETAILS)?;
            let details = stmt.query_map([], CertificationDetail::from_row)?.collect::<Result<Vec<_>, _>>()?;
            Ok(details)
        })
    }

    /// Certifications ordered by expiry date ascending, undated ones last.
    ///
    /// With a `cutoff`, only certifications expiring on or before it are
    /// returned, which also excludes those without an expiry date.
    pub fn list_by_expiry(&self, cutoff: Option<NaiveDate>) -> TrackerResult<Vec<CertificationDetail>> {
        self.db.read(|conn| {
            let mut stmt = conn.prepare(SELECT_DETAILS_BY_EXPIRY)?;
            let details = stmt
                .query_map(params![cutoff], CertificationDetail::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(details)
        })
    }

    pub fn update(&self, id: i64, changes: &CertificationUpdate) -> TrackerResult<Certification> {
        self.db.unit_of_work(|tx| {
            let mut certification = find(tx, id)?.ok_or_else(|| TrackerError::not_found(Entity::Certification, id))?;
            changes.apply(&mut certification)?;

            tx.execute(
                UPDATE_CERTIFICATION,
                params![
                    id,
                    certification.title,
                    certification.level,
                    certification.issue_date,
                    certification.expiry_date
                ],
            )?;
            debug!(id, "certification updated");
            Ok(certification)
        })
    }

    pub fn delete(&self, id: i64) -> TrackerResult<()> {
        self.db.unit_of_work(|tx| {
            let affected = tx.execute(DELETE_CERTIFICATION, params![id])?;
            if affected == 0 {
                return Err(TrackerError::not_found(Entity::Certification, id));
            }
            debug!(id, "certification deleted");
            Ok(())
        })
    }

    pub fn count(&self) -> TrackerResult<i64> {
        self.db.read(|conn| Ok(conn.query_row(COUNT_CERTIFICATIONS, [], |row| row.get(0))?))
    }
}
