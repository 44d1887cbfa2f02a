pub mod certification;
pub mod course;
pub mod dump;
pub mod init;
pub mod institution;
pub mod menu;
pub mod report;
pub mod seed;

use crate::db::db::Db;
use crate::db::error::TrackerError;
use crate::libs::{config::Config, logging, messages::Message};
use crate::{msg_debug, msg_error};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Manage institutions")]
    Institution(institution::InstitutionArgs),
    #[command(about = "Manage courses")]
    Course(course::CourseArgs),
    #[command(about = "Manage certifications")]
    Certification(certification::CertificationArgs),
    #[command(about = "View reports")]
    Report(report::ReportArgs),
    #[command(about = "Fill an empty database with sample data")]
    Seed,
    #[command(about = "Print every stored record with its status")]
    Dump,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parses arguments and runs the chosen command; no command opens the main menu.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::read()?;
        logging::init(config.log_level());

        // Only commands that touch records open the database, so `init` can fix a bad path
        let open_db = || -> Result<Db> {
            let db_path = config.database_path()?;
            let db = Db::open(&db_path)?;
            msg_debug!(Message::DatabaseLocation(db_path.display().to_string()));
            Ok(db)
        };

        match cli.command {
            Some(Commands::Init) => init::cmd(),
            Some(Commands::Institution(args)) => institution::cmd(&open_db()?, args),
            Some(Commands::Course(args)) => course::cmd(&open_db()?, args),
            Some(Commands::Certification(args)) => certification::cmd(&open_db()?, args),
            Some(Commands::Report(args)) => report::cmd(&open_db()?, args),
            Some(Commands::Seed) => seed::cmd(&open_db()?),
            Some(Commands::Dump) => dump::cmd(&open_db()?),
            None => menu::cmd(&open_db()?),
        }
    }
}

/// The date statuses are computed against.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Reports validation, not-found and integrity failures and carries on;
/// anything else is returned to the caller.
pub(crate) fn recover(result: Result<()>) -> Result<()> {
    match result {
        Err(err) => match err.downcast_ref::<TrackerError>() {
            Some(tracker_err) if tracker_err.is_user_facing() => {
                msg_error!(Message::OperationFailed(tracker_err.to_string()));
                Ok(())
            }
            _ => Err(err),
        },
        ok => ok,
    }
}
