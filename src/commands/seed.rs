use super::today;
use crate::{
    db::{
        db::Db,
        seed::{self, SeedOutcome},
    },
    libs::messages::Message,
    msg_success, msg_warning,
};
use anyhow::Result;

pub fn cmd(db: &Db) -> Result<()> {
    match seed::seed(db, today())? {
        SeedOutcome::Seeded {
            institutions,
            courses,
            certifications,
        } => msg_success!(Message::DatabaseSeeded(institutions, courses, certifications)),
        SeedOutcome::AlreadySeeded => msg_warning!(Message::DatabaseAlreadySeeded),
    }
    Ok(())
}
