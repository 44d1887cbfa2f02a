use super::recover;
use crate::{
    db::{
        courses::Courses,
        db::Db,
        error::{Entity, TrackerError},
        institutions::{Institution, InstitutionUpdate, Institutions, NewInstitution},
    },
    libs::{messages::Message, prompt, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct InstitutionArgs {
    #[command(subcommand)]
    command: Option<InstitutionCommand>,
}

#[derive(Debug, Subcommand)]
enum InstitutionCommand {
    /// Add an institution
    Add {
        /// Institution name (prompted when omitted)
        name: Option<String>,
        /// City or campus
        #[arg(short, long)]
        location: Option<String>,
        /// Founding year
        #[arg(short, long)]
        year: Option<i32>,
        /// Category, e.g. Bootcamp or University
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// List institutions
    List,
    /// Edit an institution
    Edit {
        /// Institution ID (chosen from a list when omitted)
        id: Option<i64>,
    },
    /// Delete an institution with all its courses and certifications
    Delete {
        /// Institution ID (chosen from a list when omitted)
        id: Option<i64>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(db: &Db, args: InstitutionArgs) -> Result<()> {
    match args.command {
        Some(InstitutionCommand::Add { name, location, year, kind }) => handle_add(db, name, location, year, kind),
        Some(InstitutionCommand::List) => handle_list(db),
        Some(InstitutionCommand::Edit { id }) => handle_edit(db, id),
        Some(InstitutionCommand::Delete { id, yes }) => handle_delete(db, id, yes),
        None => interactive(db),
    }
}

pub fn interactive(db: &Db) -> Result<()> {
    let options = vec![
        "Add Institution".to_string(),
        "List Institutions".to_string(),
        "Update Institution".to_string(),
        "Delete Institution".to_string(),
        "Back to Main Menu".to_string(),
    ];

    loop {
        let result = match prompt::select(Message::SelectInstitutionAction, &options)? {
            Some(0) => handle_add(db, None, None, None, None),
            Some(1) => handle_list(db),
            Some(2) => handle_edit(db, None),
            Some(3) => handle_delete(db, None, false),
            _ => return Ok(()),
        };
        recover(result)?;
    }
}

fn handle_add(db: &Db, name: Option<String>, location: Option<String>, year: Option<i32>, kind: Option<String>) -> Result<()> {
    // Without a name on the command line the whole record is collected interactively
    let new = match name {
        Some(name) => NewInstitution { name, location, year, kind },
        None => NewInstitution {
            name: prompt::required_text(Message::PromptInstitutionName)?,
            location: prompt::optional_text(Message::PromptInstitutionLocation)?,
            year: prompt::optional_year(Message::PromptInstitutionYear)?,
            kind: prompt::optional_text(Message::PromptInstitutionType)?,
        },
    };

    let institution = Institutions::new(db).add(&new)?;
    msg_success!(Message::InstitutionSaved(format!("[{}] {}", institution.id, institution.name)));
    Ok(())
}

fn handle_list(db: &Db) -> Result<()> {
    let institutions = Institutions::new(db).list()?;

    if institutions.is_empty() {
        msg_info!(Message::NoInstitutionsFound);
        return Ok(());
    }

    msg_print!(Message::InstitutionListHeader, true);
    View::institutions(&institutions);
    Ok(())
}

/// Resolves an institution from an explicit id or a selection list.
///
/// A missing institution is reported and yields `None`, which aborts the
/// calling operation.
pub(crate) fn choose(db: &Db, id: Option<i64>) -> Result<Option<Institution>> {
    let institutions = Institutions::new(db);

    if let Some(id) = id {
        let institution = institutions.get(id)?;
        if institution.is_none() {
            msg_error!(Message::OperationFailed(TrackerError::not_found(Entity::Institution, id).to_string()));
        }
        return Ok(institution);
    }

    let mut all = institutions.list()?;
    if all.is_empty() {
        msg_info!(Message::NoInstitutionsFound);
        return Ok(None);
    }

    let labels: Vec<String> = all
        .iter()
        .map(|i| format!("[{}] {} ({})", i.id, i.name, i.location.as_deref().unwrap_or("N/A")))
        .collect();
    Ok(prompt::select(Message::SelectInstitution, &labels)?.map(|index| all.swap_remove(index)))
}

fn handle_edit(db: &Db, id: Option<i64>) -> Result<()> {
    let Some(institution) = choose(db, id)? else {
        return Ok(());
    };

    msg_print!(Message::EditingInstitution(institution.name.clone()), true);

    let changes = InstitutionUpdate {
        name: prompt::edit_text(Message::PromptInstitutionName, Some(&institution.name))?,
        location: prompt::edit_text(Message::PromptInstitutionLocation, institution.location.as_deref())?,
        year: prompt::edit_year(Message::PromptInstitutionYear, institution.year)?,
        kind: prompt::edit_text(Message::PromptInstitutionType, institution.kind.as_deref())?,
    };

    if changes.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let updated = Institutions::new(db).update(institution.id, &changes)?;
    msg_success!(Message::InstitutionUpdated(updated.name));
    Ok(())
}

fn handle_delete(db: &Db, id: Option<i64>, yes: bool) -> Result<()> {
    let Some(institution) = choose(db, id)? else {
        return Ok(());
    };

    let course_count = Courses::new(db).list_for_institution(institution.id)?.len();
    if !yes && !prompt::confirm(Message::ConfirmDeleteInstitution(institution.name.clone(), course_count))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    Institutions::new(db).delete(institution.id)?;
    msg_success!(Message::InstitutionDeleted(institution.name));
    Ok(())
}
