//! Prints everything stored, for troubleshooting.

use super::today;
use crate::{
    db::{
        certifications::Certifications, courses::Courses, db::Db, institutions::Institutions,
        migrations::MigrationManager, reports,
    },
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd(db: &Db) -> Result<()> {
    msg_print!(Message::DumpHeader(db.path().display().to_string(), db.schema_version()?));

    let history = db.read(|conn| MigrationManager::new().get_migration_history(conn))?;
    for (version, name, applied_at) in history {
        msg_print!(Message::DumpMigration(version, name, applied_at));
    }

    let institutions = Institutions::new(db).list()?;
    msg_print!(Message::DumpSection(format!("institutions ({})", institutions.len())), true);
    View::institutions(&institutions);

    let course_count = Courses::new(db).count()?;
    msg_print!(Message::DumpSection(format!("courses ({})", course_count)), true);
    View::courses(&reports::by_institution(db, today())?);

    let certifications = Certifications::new(db).list_details()?;
    msg_print!(Message::DumpSection(format!("certifications ({})", certifications.len())), true);
    View::certifications(&certifications, today());

    Ok(())
}
