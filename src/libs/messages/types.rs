//! Every user-facing message in certrack.
//!
//! Text lives in [`display`](super::display); this enum only names the
//! messages and carries their parameters.

#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MainMenuTitle,
    SelectMainAction,
    SelectInstitutionAction,
    SelectCourseAction,
    SelectCertificationAction,
    SelectReportAction,
    Goodbye,

    // === INSTITUTION MESSAGES ===
    InstitutionSaved(String),
    InstitutionUpdated(String),
    InstitutionDeleted(String),
    InstitutionListHeader,
    NoInstitutionsFound,
    SelectInstitution,
    EditingInstitution(String),
    ConfirmDeleteInstitution(String, usize), // name, course count
    PromptInstitutionName,
    PromptInstitutionLocation,
    PromptInstitutionYear,
    PromptInstitutionType,

    // === COURSE MESSAGES ===
    CourseSaved(String),
    CourseUpdated(String),
    CourseDeleted(String),
    CourseListHeader,
    CourseListLine(i64, String, String, String), // id, name, duration, description
    NoCoursesFound,
    SelectCourse,
    AddingCourseUnder(String),
    EditingCourse(String),
    ConfirmDeleteCourse(String, usize), // name, certification count
    PromptCourseName,
    PromptCourseDescription,
    PromptCourseDuration,

    // === CERTIFICATION MESSAGES ===
    CertificationSaved(String, String), // title, status
    CertificationUpdated(String),
    CertificationDeleted(String),
    CertificationListHeader,
    NoCertificationsFound,
    SelectCertification,
    AddingCertificationUnder(String),
    EditingCertification(String),
    ConfirmDeleteCertification(String),
    PromptCertificationTitle,
    PromptCertificationLevel,
    PromptIssueDate,
    PromptExpiryDate,
    PromptIssueDateEdit,
    PromptExpiryDateEdit,

    // === REPORT MESSAGES ===
    ReportByInstitutionHeader,
    ExpiryOverviewHeader,
    NoReportData,
    NoExpiringCertifications,
    NoCoursesListed,
    NoCertificationsListed,
    ReportInstitutionLine(String, String), // name, location
    ReportCourseLine(String),
    ReportCertificationLine(String, String), // title, status

    // === SEED AND DUMP MESSAGES ===
    DatabaseSeeded(usize, usize, usize), // institutions, courses, certifications
    DatabaseAlreadySeeded,
    DumpHeader(String, u32), // database path, schema version
    DumpSection(String),
    DumpMigration(u32, String, String), // version, name, applied at

    // === CONFIGURATION MESSAGES ===
    ConfigHeader,
    ConfigSaved,
    PromptDatabasePath,
    PromptLogLevel,
    DatabaseLocation(String),

    // === INPUT MESSAGES ===
    FieldCannotBeEmpty,
    InvalidYear,
    InvalidDate,
    NoChangesDetected,
    OperationCancelled,
    OperationFailed(String),
}
