use super::{institution, recover, today};
use crate::{
    db::{
        certifications::Certifications,
        courses::{Course, CourseUpdate, Courses, NewCourse},
        db::Db,
        error::{Entity, TrackerError},
        institutions::Institutions,
        reports,
    },
    libs::{messages::Message, prompt, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct CourseArgs {
    #[command(subcommand)]
    command: Option<CourseCommand>,
}

#[derive(Debug, Subcommand)]
enum CourseCommand {
    /// Add a course under an institution
    Add {
        /// Course name (prompted when omitted)
        name: Option<String>,
        /// Owning institution ID (chosen from a list when omitted)
        #[arg(short, long)]
        institution: Option<i64>,
        /// Course description
        #[arg(short, long)]
        description: Option<String>,
        /// Duration label, e.g. "6 months"
        #[arg(long)]
        duration: Option<String>,
    },
    /// List courses grouped by institution
    List,
    /// Edit a course
    Edit {
        /// Course ID (chosen from a list when omitted)
        id: Option<i64>,
    },
    /// Delete a course with its certifications
    Delete {
        /// Course ID (chosen from a list when omitted)
        id: Option<i64>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(db: &Db, args: CourseArgs) -> Result<()> {
    match args.command {
        Some(CourseCommand::Add {
            name,
            institution,
            description,
            duration,
        }) => handle_add(db, institution, name, description, duration),
        Some(CourseCommand::List) => handle_list(db),
        Some(CourseCommand::Edit { id }) => handle_edit(db, id),
        Some(CourseCommand::Delete { id, yes }) => handle_delete(db, id, yes),
        None => interactive(db),
    }
}

pub fn interactive(db: &Db) -> Result<()> {
    let options = vec![
        "Add Course".to_string(),
        "List Courses".to_string(),
        "Update Course".to_string(),
        "Delete Course".to_string(),
        "Back to Main Menu".to_string(),
    ];

    loop {
        let result = match prompt::select(Message::SelectCourseAction, &options)? {
            Some(0) => handle_add(db, None, None, None, None),
            Some(1) => handle_list(db),
            Some(2) => handle_edit(db, None),
            Some(3) => handle_delete(db, None, false),
            _ => return Ok(()),
        };
        recover(result)?;
    }
}

fn handle_add(
    db: &Db,
    institution_id: Option<i64>,
    name: Option<String>,
    description: Option<String>,
    duration: Option<String>,
) -> Result<()> {
    let Some(owner) = institution::choose(db, institution_id)? else {
        return Ok(());
    };

    let new = match name {
        Some(name) => NewCourse {
            institution_id: owner.id,
            name,
            description,
            duration,
        },
        None => {
            msg_print!(Message::AddingCourseUnder(owner.name.clone()), true);
            NewCourse {
                institution_id: owner.id,
                name: prompt::required_text(Message::PromptCourseName)?,
                description: prompt::optional_text(Message::PromptCourseDescription)?,
                duration: prompt::optional_text(Message::PromptCourseDuration)?,
            }
        }
    };

    let course = Courses::new(db).add(&new)?;
    msg_success!(Message::CourseSaved(format!("[{}] {}", course.id, course.name)));
    Ok(())
}

fn handle_list(db: &Db) -> Result<()> {
    let report = reports::by_institution(db, today())?;

    if report.is_empty() {
        msg_info!(Message::NoInstitutionsFound);
        return Ok(());
    }

    msg_print!(Message::CourseListHeader);
    View::courses(&report);
    Ok(())
}

/// Resolves a course from an explicit id or a selection list.
pub(crate) fn choose(db: &Db, id: Option<i64>) -> Result<Option<Course>> {
    let courses = Courses::new(db);

    if let Some(id) = id {
        let course = courses.get(id)?;
        if course.is_none() {
            msg_error!(Message::OperationFailed(TrackerError::not_found(Entity::Course, id).to_string()));
        }
        return Ok(course);
    }

    let mut all = courses.list()?;
    if all.is_empty() {
        msg_info!(Message::NoCoursesFound);
        return Ok(None);
    }

    let institutions = Institutions::new(db).list()?;
    let names: HashMap<i64, &str> = institutions.iter().map(|i| (i.id, i.name.as_str())).collect();
    let labels: Vec<String> = all
        .iter()
        .map(|c| {
            let owner = names.get(&c.institution_id).copied().unwrap_or("-");
            format!("[{}] {} | {}", c.id, c.name, owner)
        })
        .collect();
    Ok(prompt::select(Message::SelectCourse, &labels)?.map(|index| all.swap_remove(index)))
}

fn handle_edit(db: &Db, id: Option<i64>) -> Result<()> {
    let Some(course) = choose(db, id)? else {
        return Ok(());
    };

    msg_print!(Message::EditingCourse(course.name.clone()), true);

    let changes = CourseUpdate {
        name: prompt::edit_text(Message::PromptCourseName, Some(&course.name))?,
        description: prompt::edit_text(Message::PromptCourseDescription, course.description.as_deref())?,
        duration: prompt::edit_text(Message::PromptCourseDuration, course.duration.as_deref())?,
    };

    if changes.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let updated = Courses::new(db).update(course.id, &changes)?;
    msg_success!(Message::CourseUpdated(updated.name));
    Ok(())
}

fn handle_delete(db: &Db, id: Option<i64>, yes: bool) -> Result<()> {
    let Some(course) = choose(db, id)? else {
        return Ok(());
    };

    let certification_count = Certifications::new(db).list_for_course(course.id)?.len();
    if !yes && !prompt::confirm(Message::ConfirmDeleteCourse(course.name.clone(), certification_count))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    Courses::new(db).delete(course.id)?;
    msg_success!(Message::CourseDeleted(course.name));
    Ok(())
}
