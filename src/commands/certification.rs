use super::{course, recover, today};
use crate::{
    db::{
        certifications::{Certification, CertificationUpdate, Certifications, NewCertification},
        db::Db,
        error::{Entity, TrackerError},
    },
    libs::{messages::Message, prompt, status::parse_date, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct CertificationArgs {
    #[command(subcommand)]
    command: Option<CertificationCommand>,
}

fn date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

#[derive(Debug, Subcommand)]
enum CertificationCommand {
    /// Add a certification under a course
    Add {
        /// Certification title (prompted when omitted)
        title: Option<String>,
        /// Owning course ID (chosen from a list when omitted)
        #[arg(short, long)]
        course: Option<i64>,
        /// Level, e.g. Associate or Professional
        #[arg(short, long)]
        level: Option<String>,
        /// Issue date (YYYY-MM-DD)
        #[arg(long, value_parser = date_arg)]
        issued: Option<NaiveDate>,
        /// Expiry date (YYYY-MM-DD); omit when it does not expire
        #[arg(long, value_parser = date_arg)]
        expires: Option<NaiveDate>,
    },
    /// List certifications with their status
    List,
    /// Edit a certification
    Edit {
        /// Certification ID (chosen from a list when omitted)
        id: Option<i64>,
    },
    /// Delete a certification
    Delete {
        /// Certification ID (chosen from a list when omitted)
        id: Option<i64>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(db: &Db, args: CertificationArgs) -> Result<()> {
    match args.command {
        Some(CertificationCommand::Add {
            title,
            course,
            level,
            issued,
            expires,
        }) => {
            let details = title.map(|title| NewCertification {
                course_id: 0,
                title,
                level,
                issue_date: issued,
                expiry_date: expires,
            });
            handle_add(db, course, details)
        }
        Some(CertificationCommand::List) => handle_list(db),
        Some(CertificationCommand::Edit { id }) => handle_edit(db, id),
        Some(CertificationCommand::Delete { id, yes }) => handle_delete(db, id, yes),
        None => interactive(db),
    }
}

pub fn interactive(db: &Db) -> Result<()> {
    let options = vec![
        "Add Certification".to_string(),
        "List Certifications".to_string(),
        "Update Certification".to_string(),
        "Delete Certification".to_string(),
        "Back to Main Menu".to_string(),
    ];

    loop {
        let result = match prompt::select(Message::SelectCertificationAction, &options)? {
            Some(0) => handle_add(db, None, None),
            Some(1) => handle_list(db),
            Some(2) => handle_edit(db, None),
            Some(3) => handle_delete(db, None, false),
            _ => return Ok(()),
        };
        recover(result)?;
    }
}

/// `details` carries values given on the command line; the course id is
/// filled in once the owning course is resolved.
fn handle_add(db: &Db, course_id: Option<i64>, details: Option<NewCertification>) -> Result<()> {
    let Some(owner) = course::choose(db, course_id)? else {
        return Ok(());
    };

    let new = match details {
        Some(details) => NewCertification {
            course_id: owner.id,
            ..details
        },
        None => {
            msg_print!(Message::AddingCertificationUnder(owner.name.clone()), true);
            NewCertification {
                course_id: owner.id,
                title: prompt::required_text(Message::PromptCertificationTitle)?,
                level: prompt::optional_text(Message::PromptCertificationLevel)?,
                issue_date: prompt::optional_date(Message::PromptIssueDate)?,
                expiry_date: prompt::optional_date(Message::PromptExpiryDate)?,
            }
        }
    };

    let certification = Certifications::new(db).add(&new)?;
    msg_success!(Message::CertificationSaved(
        format!("[{}] {}", certification.id, certification.title),
        certification.status(today()).to_string()
    ));
    Ok(())
}

fn handle_list(db: &Db) -> Result<()> {
    let details = Certifications::new(db).list_details()?;

    if details.is_empty() {
        msg_info!(Message::NoCertificationsFound);
        return Ok(());
    }

    msg_print!(Message::CertificationListHeader, true);
    View::certifications(&details, today());
    Ok(())
}

fn choose(db: &Db, id: Option<i64>) -> Result<Option<Certification>> {
    let certifications = Certifications::new(db);

    if let Some(id) = id {
        let certification = certifications.get(id)?;
        if certification.is_none() {
            msg_error!(Message::OperationFailed(TrackerError::not_found(Entity::Certification, id).to_string()));
        }
        return Ok(certification);
    }

    let mut all = certifications.list_details()?;
    if all.is_empty() {
        msg_info!(Message::NoCertificationsFound);
        return Ok(None);
    }

    let today = today();
    let labels: Vec<String> = all
        .iter()
        .map(|d| {
            format!(
                "[{}] {} | {} | {} | {}",
                d.certification.id,
                d.certification.title,
                d.course_name,
                d.institution_name,
                d.certification.status(today)
            )
        })
        .collect();
    Ok(prompt::select(Message::SelectCertification, &labels)?.map(|index| all.swap_remove(index).certification))
}

fn handle_edit(db: &Db, id: Option<i64>) -> Result<()> {
    let Some(certification) = choose(db, id)? else {
        return Ok(());
    };

    msg_print!(Message::EditingCertification(certification.title.clone()), true);

    let changes = CertificationUpdate {
        title: prompt::edit_text(Message::PromptCertificationTitle, Some(&certification.title))?,
        level: prompt::edit_text(Message::PromptCertificationLevel, certification.level.as_deref())?,
        issue_date: prompt::edit_date(Message::PromptIssueDateEdit, certification.issue_date)?,
        expiry_date: prompt::edit_date(Message::PromptExpiryDateEdit, certification.expiry_date)?,
    };

    if changes.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let updated = Certifications::new(db).update(certification.id, &changes)?;
    msg_success!(Message::CertificationUpdated(updated.title));
    Ok(())
}

fn handle_delete(db: &Db, id: Option<i64>, yes: bool) -> Result<()> {
    let Some(certification) = choose(db, id)? else {
        return Ok(());
    };

    if !yes && !prompt::confirm(Message::ConfirmDeleteCertification(certification.title.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    Certifications::new(db).delete(certification.id)?;
    msg_success!(Message::CertificationDeleted(certification.title));
    Ok(())
}
