//! The two read-only reports.
//!
//! - [`by_institution`]: every institution, its courses and their certifications
//! - [`expiry_overview`]: certifications already expired or expiring within
//!   [`EXPIRING_SOON_DAYS`](crate::libs::status::EXPIRING_SOON_DAYS) days
//!
//! Both take `today` explicitly; statuses are classified here so callers only
//! have to render them.

use crate::db::certifications::{CertificationDetail, Certifications};
use crate::db::courses::Course;
use crate::db::db::Db;
use crate::db::error::TrackerResult;
use crate::db::institutions::Institution;
use crate::libs::status::{expiring_soon_cutoff, CertificationStatus};
use chrono::NaiveDate;
use serde::Serialize;

// LEFT JOINs keep institutions without courses and courses without
// certifications; their missing columns come back NULL.
const SELECT_INSTITUTION_TREE: &str = "
    SELECT i.id, i.name, i.location, i.year, i.type,
           c.id, c.institution_id, c.name, c.description, c.duration,
           cert.title, cert.expiry_date
    FROM institutions i
    LEFT JOIN courses c ON c.institution_id = i.id
    LEFT JOIN certifications cert ON cert.course_id = c.id
    ORDER BY i.name, i.id, c.name, c.id, cert.title, cert.id
";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationLine {
    pub title: String,
    pub status: CertificationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseReport {
    pub course: Course,
    pub certifications: Vec<CertificationLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionReport {
    pub institution: Institution,
    pub courses: Vec<CourseReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryEntry {
    pub detail: CertificationDetail,
    pub status: CertificationStatus,
    /// Negative once expired.
    pub days_remaining: i64,
}

type TreeRow = (Institution, Option<Course>, Option<(String, Option<NaiveDate>)>);

/// Institutions ordered by name, each with its courses ordered by name and
/// every course's certifications as `(title, status)` ordered by title.
///
/// Institutions without courses and courses without certifications are kept
/// with empty lists.
pub fn by_institution(db: &Db, today: NaiveDate) -> TrackerResult<Vec<InstitutionReport>> {
    let rows: Vec<TreeRow> = db.read(|conn| {
        let mut stmt = conn.prepare(SELECT_INSTITUTION_TREE)?;
        let rows = stmt
            .query_map([], |row| {
                let institution = Institution {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    location: row.get(2)?,
                    year: row.get(3)?,
                    kind: row.get(4)?,
                };
                let course = match row.get::<_, Option<i64>>(5)? {
                    Some(id) => Some(Course {
                        id,
                        institution_id: row.get(6)?,
                        name: row.get(7)?,
                        description: row.get(8)?,
                        duration: row.get(9)?,
                    }),
                    None => None,
                };
                let certification = match row.get::<_, Option<String>>(10)? {
                    Some(title) => Some((title, row.get::<_, Option<NaiveDate>>(11)?)),
                    None => None,
                };
                Ok((institution, course, certification))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })?;

    let mut report: Vec<InstitutionReport> = Vec::new();
    for (institution, course, certification) in rows {
        if report.last().map(|r| r.institution.id) != Some(institution.id) {
            report.push(InstitutionReport {
                institution,
                courses: Vec::new(),
            });
        }
        let Some(entry) = report.last_mut() else { continue };

        let Some(course) = course else { continue };
        if entry.courses.last().map(|c| c.course.id) != Some(course.id) {
            entry.courses.push(CourseReport {
                course,
                certifications: Vec::new(),
            });
        }
        let Some(course_entry) = entry.courses.last_mut() else { continue };

        if let Some((title, expiry_date)) = certification {
            course_entry.certifications.push(CertificationLine {
                title,
                status: CertificationStatus::classify(expiry_date, today),
            });
        }
    }

    Ok(report)
}

/// Certifications with an expiry date that is past or at most 30 days away,
/// soonest first.
pub fn expiry_overview(db: &Db, today: NaiveDate) -> TrackerResult<Vec<ExpiryEntry>> {
    let cutoff = expiring_soon_cutoff(today);
    let details = Certifications::new(db).list_by_expiry(Some(cutoff))?;

    let entries = details
        .into_iter()
        .filter_map(|detail| {
            let days_remaining = detail.certification.days_to_expiry(today)?;
            let status = detail.certification.status(today);
            Some(ExpiryEntry {
                detail,
                status,
                days_remaining,
            })
        })
        .filter(|entry| entry.status.needs_attention())
        .collect();

    Ok(entries)
}
