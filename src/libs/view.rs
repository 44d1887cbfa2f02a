use crate::db::certifications::CertificationDetail;
use crate::db::institutions::Institution;
use crate::db::reports::{ExpiryEntry, InstitutionReport};
use crate::libs::messages::Message;
use chrono::NaiveDate;
use prettytable::{row, Table};

const NONE: &str = "-";

fn or_dash<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_else(|| NONE.to_string())
}

pub struct View {}

impl View {
    pub fn institutions(institutions: &[Institution]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "LOCATION", "YEAR", "TYPE"]);
        for institution in institutions {
            table.add_row(row![
                institution.id,
                institution.name,
                or_dash(&institution.location),
                or_dash(&institution.year),
                or_dash(&institution.kind)
            ]);
        }
        table.printstd();
    }

    /// Every institution with its courses; institutions without courses are kept.
    pub fn courses(report: &[InstitutionReport]) {
        for line in course_lines(report) {
            println!("{}", line);
        }
    }

    pub fn certifications(details: &[CertificationDetail], today: NaiveDate) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "LEVEL", "COURSE", "INSTITUTION", "ISSUED", "EXPIRES", "STATUS"]);
        for detail in details {
            let cert = &detail.certification;
            table.add_row(row![
                cert.id,
                cert.title,
                or_dash(&cert.level),
                detail.course_name,
                detail.institution_name,
                or_dash(&cert.issue_date),
                or_dash(&cert.expiry_date),
                cert.status(today)
            ]);
        }
        table.printstd();
    }

    pub fn report_by_institution(report: &[InstitutionReport]) {
        for line in report_lines(report) {
            println!("{}", line);
        }
    }

    pub fn expiry_overview(entries: &[ExpiryEntry]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "COURSE", "INSTITUTION", "EXPIRES", "DAYS", "STATUS"]);
        for entry in entries {
            table.add_row(row![
                entry.detail.certification.id,
                entry.detail.certification.title,
                entry.detail.course_name,
                entry.detail.institution_name,
                or_dash(&entry.detail.certification.expiry_date),
                entry.days_remaining,
                entry.status
            ]);
        }
        table.printstd();
    }
}

fn institution_line(institution: &Institution) -> String {
    let location = institution.location.clone().unwrap_or_else(|| "N/A".to_string());
    format!("\n{}", Message::ReportInstitutionLine(institution.name.clone(), location))
}

fn course_lines(report: &[InstitutionReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in report {
        lines.push(institution_line(&entry.institution));
        if entry.courses.is_empty() {
            lines.push(format!("  {}", Message::NoCoursesListed));
        }
        for course in &entry.courses {
            let course = &course.course;
            let line = Message::CourseListLine(course.id, course.name.clone(), or_dash(&course.duration), or_dash(&course.description));
            lines.push(format!("  {}", line));
        }
    }
    lines
}

fn report_lines(report: &[InstitutionReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in report {
        lines.push(institution_line(&entry.institution));
        if entry.courses.is_empty() {
            lines.push(format!("  {}", Message::NoCoursesListed));
        }
        for course in &entry.courses {
            lines.push(format!("  {}", Message::ReportCourseLine(course.course.name.clone())));
            if course.certifications.is_empty() {
                lines.push(format!("    {}", Message::NoCertificationsListed));
            }
            for cert in &course.certifications {
                lines.push(format!("    {}", Message::ReportCertificationLine(cert.title.clone(), cert.status.to_string())));
            }
        }
    }
    lines
}
