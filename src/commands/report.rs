use super::{recover, today};
use crate::{
    db::{db::Db, reports},
    libs::{messages::Message, prompt, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    command: Option<ReportCommand>,
    /// Print the report as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum ReportCommand {
    /// Institutions with their courses and certification statuses
    ByInstitution,
    /// Certifications expired or expiring within 30 days
    Expiry,
}

pub fn cmd(db: &Db, args: ReportArgs) -> Result<()> {
    match args.command {
        Some(ReportCommand::ByInstitution) => by_institution(db, args.json),
        Some(ReportCommand::Expiry) => expiry(db, args.json),
        None => interactive(db),
    }
}

pub fn interactive(db: &Db) -> Result<()> {
    let options = vec![
        "Certifications by Institution".to_string(),
        "Expiry Overview".to_string(),
        "Back to Main Menu".to_string(),
    ];

    loop {
        let result = match prompt::select(Message::SelectReportAction, &options)? {
            Some(0) => by_institution(db, false),
            Some(1) => expiry(db, false),
            _ => return Ok(()),
        };
        recover(result)?;
    }
}

fn by_institution(db: &Db, json: bool) -> Result<()> {
    let report = reports::by_institution(db, today())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    msg_print!(Message::ReportByInstitutionHeader, true);
    if report.is_empty() {
        msg_info!(Message::NoReportData);
        return Ok(());
    }
    View::report_by_institution(&report);
    Ok(())
}

fn expiry(db: &Db, json: bool) -> Result<()> {
    let entries = reports::expiry_overview(db, today())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    msg_print!(Message::ExpiryOverviewHeader, true);
    if entries.is_empty() {
        msg_info!(Message::NoExpiringCertifications);
        return Ok(());
    }
    View::expiry_overview(&entries);
    Ok(())
}
