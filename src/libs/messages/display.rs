//! Text for every [`Message`] variant.
//!
//! Keeping all wording in one match means a new variant cannot be added
//! without deciding how it reads.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MainMenuTitle => "Course & Certification Tracker".to_string(),
            Message::SelectMainAction => "Select an option".to_string(),
            Message::SelectInstitutionAction => "Institutions".to_string(),
            Message::SelectCourseAction => "Courses".to_string(),
            Message::SelectCertificationAction => "Certifications".to_string(),
            Message::SelectReportAction => "Reports".to_string(),
            Message::Goodbye => "Thanks for using the tracker. Goodbye!".to_string(),

            // === INSTITUTION MESSAGES ===
            Message::InstitutionSaved(name) => format!("Institution '{}' saved.", name),
            Message::InstitutionUpdated(name) => format!("Institution '{}' updated.", name),
            Message::InstitutionDeleted(name) => format!("Institution '{}' deleted.", name),
            Message::InstitutionListHeader => "Institutions:".to_string(),
            Message::NoInstitutionsFound => "No institutions found.".to_string(),
            Message::SelectInstitution => "Select institution".to_string(),
            Message::EditingInstitution(name) => format!("Editing institution: {}", name),
            Message::ConfirmDeleteInstitution(name, 0) => format!("Delete institution '{}'?", name),
            Message::ConfirmDeleteInstitution(name, courses) => format!(
                "Institution '{}' has {} course(s). Delete it and ALL its courses & certifications?",
                name, courses
            ),
            Message::PromptInstitutionName => "Name".to_string(),
            Message::PromptInstitutionLocation => "Location (optional)".to_string(),
            Message::PromptInstitutionYear => "Year (e.g., 2019, blank to skip)".to_string(),
            Message::PromptInstitutionType => "Type (e.g., Bootcamp/University, optional)".to_string(),

            // === COURSE MESSAGES ===
            Message::CourseSaved(name) => format!("Course '{}' saved.", name),
            Message::CourseUpdated(name) => format!("Course '{}' updated.", name),
            Message::CourseDeleted(name) => format!("Course '{}' deleted.", name),
            Message::CourseListHeader => "Courses:".to_string(),
            Message::CourseListLine(id, name, duration, description) => {
                format!("[{}] {} | {} | {}", id, name, duration, description)
            }
            Message::NoCoursesFound => "No courses found.".to_string(),
            Message::SelectCourse => "Select course".to_string(),
            Message::AddingCourseUnder(name) => format!("Adding course under: {}", name),
            Message::EditingCourse(name) => format!("Editing course: {}", name),
            Message::ConfirmDeleteCourse(name, 0) => format!("Delete course '{}'?", name),
            Message::ConfirmDeleteCourse(name, certifications) => format!(
                "Course '{}' has {} certification(s). Delete it and all its certifications?",
                name, certifications
            ),
            Message::PromptCourseName => "Course name".to_string(),
            Message::PromptCourseDescription => "Description (optional)".to_string(),
            Message::PromptCourseDuration => "Duration (e.g., '6 months', optional)".to_string(),

            // === CERTIFICATION MESSAGES ===
            Message::CertificationSaved(title, status) => format!("Certification '{}' saved ({}).", title, status),
            Message::CertificationUpdated(title) => format!("Certification '{}' updated.", title),
            Message::CertificationDeleted(title) => format!("Certification '{}' deleted.", title),
            Message::CertificationListHeader => "Certifications:".to_string(),
            Message::NoCertificationsFound => "No certifications found.".to_string(),
            Message::SelectCertification => "Select certification".to_string(),
            Message::AddingCertificationUnder(name) => format!("Adding certification under course: {}", name),
            Message::EditingCertification(title) => format!("Editing certification: {}", title),
            Message::ConfirmDeleteCertification(title) => format!("Delete certification '{}'?", title),
            Message::PromptCertificationTitle => "Title".to_string(),
            Message::PromptCertificationLevel => "Level (optional)".to_string(),
            Message::PromptIssueDate => "Issue date (YYYY-MM-DD, blank to skip)".to_string(),
            Message::PromptExpiryDate => "Expiry date (YYYY-MM-DD, blank if none)".to_string(),
            Message::PromptIssueDateEdit => "Issue date (YYYY-MM-DD, '-' to clear)".to_string(),
            Message::PromptExpiryDateEdit => "Expiry date (YYYY-MM-DD, '-' to clear)".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportByInstitutionHeader => "Certifications by Institution".to_string(),
            Message::ExpiryOverviewHeader => "Expiry Overview".to_string(),
            Message::NoReportData => "No data.".to_string(),
            Message::NoExpiringCertifications => "No expiring or expired certifications within 30 days.".to_string(),
            Message::NoCoursesListed => "(no courses)".to_string(),
            Message::NoCertificationsListed => "(no certifications)".to_string(),
            Message::ReportInstitutionLine(name, location) => format!("{} ({})", name, location),
            Message::ReportCourseLine(name) => format!("Course: {}", name),
            Message::ReportCertificationLine(title, status) => format!("- {} ({})", title, status),

            // === SEED AND DUMP MESSAGES ===
            Message::DatabaseSeeded(institutions, courses, certifications) => format!(
                "Database seeded with {} institution(s), {} course(s) and {} certification(s).",
                institutions, courses, certifications
            ),
            Message::DatabaseAlreadySeeded => "Database already seeded.".to_string(),
            Message::DumpHeader(path, version) => format!("Database: {} (schema version {})", path, version),
            Message::DumpSection(title) => format!("--- {} ---", title),
            Message::DumpMigration(version, name, applied_at) => format!("  v{} {} ({})", version, name, applied_at),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigHeader => "Configuration".to_string(),
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptLogLevel => "Log level (error, warn, info, debug, trace)".to_string(),
            Message::DatabaseLocation(path) => format!("Using database at {}", path),

            // === INPUT MESSAGES ===
            Message::FieldCannotBeEmpty => "This field cannot be empty.".to_string(),
            Message::InvalidYear => "Please enter a whole number (digits only).".to_string(),
            Message::InvalidDate => "Invalid date. Use format YYYY-MM-DD (e.g., 2025-01-31).".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::OperationCancelled => "Cancelled.".to_string(),
            Message::OperationFailed(reason) => format!("Operation failed: {}", reason),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_lines_carry_their_fields() {
        assert_eq!(
            Message::DumpMigration(1, "create_tracker_tables".to_string(), "2025-01-15 08:00:00".to_string()).to_string(),
            "  v1 create_tracker_tables (2025-01-15 08:00:00)"
        );
        assert_eq!(Message::ReportCourseLine("Data Science".to_string()).to_string(), "Course: Data Science");
        assert_eq!(
            Message::ReportInstitutionLine("Moringa School".to_string(), "Nairobi".to_string()).to_string(),
            "Moringa School (Nairobi)"
        );
    }
}
