//! Demo data for a fresh database.

use crate::db::certifications::{self, NewCertification};
use crate::db::courses::{self, NewCourse};
use crate::db::db::Db;
use crate::db::error::TrackerResult;
use crate::db::institutions::{self, NewInstitution};
use chrono::{Duration, NaiveDate};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { institutions: usize, courses: usize, certifications: usize },
    AlreadySeeded,
}

/// Inserts the sample hierarchy when no institution exists yet.
///
/// All rows go in one unit of work, so a failure leaves the database empty.
pub fn seed(db: &Db, today: NaiveDate) -> TrackerResult<SeedOutcome> {
    db.unit_of_work(|tx| {
        if institutions::count(tx)? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let moringa = institutions::insert(
            tx,
            &NewInstitution::new("Moringa School").location("Nairobi").year(2014).kind("Bootcamp"),
        )?;
        let university = institutions::insert(
            tx,
            &NewInstitution::new("Example University").location("Nairobi").year(2000).kind("University"),
        )?;

        let data_science = courses::insert(
            tx,
            &NewCourse::new(moringa.id, "Data Science").description("Python, SQL, ML").duration("6 months"),
        )?;
        let software = courses::insert(
            tx,
            &NewCourse::new(moringa.id, "Software Engineering")
                .description("Backend + Frontend")
                .duration("12 months"),
        )?;
        let ai = courses::insert(
            tx,
            &NewCourse::new(university.id, "AI Fundamentals").description("Intro to AI").duration("1 semester"),
        )?;

        let samples = [
            NewCertification::new(data_science.id, "Pandas Pro")
                .level("Associate")
                .issued(today)
                .expires(today + Duration::days(30)),
            NewCertification::new(software.id, "Web APIs")
                .level("Professional")
                .issued(today)
                .expires(today + Duration::days(90)),
            NewCertification::new(ai.id, "AI Ethics").level("Associate").issued(today),
        ];
        for sample in &samples {
            certifications::insert(tx, sample)?;
        }

        info!("database seeded with sample data");
        Ok(SeedOutcome::Seeded {
            institutions: 2,
            courses: 3,
            certifications: samples.len(),
        })
    })
}
