#[cfg(test)]
mod tests {
    use certrack::db::certifications::{Certifications, NewCertification};
    use certrack::db::courses::{CourseUpdate, Courses, NewCourse};
    use certrack::db::db::Db;
    use certrack::db::error::{Entity, TrackerError};
    use certrack::db::institutions::{Institutions, NewInstitution};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CourseTestContext {
        _temp_dir: TempDir,
        db: Db,
        institution_id: i64,
    }

    impl TestContext for CourseTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("certrack.db")).unwrap();
            let institution = Institutions::new(&db).add(&NewInstitution::new("Moringa School")).unwrap();
            CourseTestContext {
                _temp_dir: temp_dir,
                db,
                institution_id: institution.id,
            }
        }
    }

    #[test_context(CourseTestContext)]
    #[test]
    fn test_add_and_get_round_trip(ctx: &mut CourseTestContext) {
        let courses = Courses::new(&ctx.db);

        let added = courses
            .add(
                &NewCourse::new(ctx.institution_id, "Data Science")
                    .description("Python, SQL, ML")
                    .duration("6 months"),
            )
            .unwrap();

        let fetched = courses.get(added.id).unwrap().unwrap();
        assert_eq!(fetched, added);
        assert_eq!(fetched.institution_id, ctx.institution_id);
        assert_eq!(fetched.description.as_deref(), Some("Python, SQL, ML"));
        assert_eq!(fetched.duration.as_deref(), Some("6 months"));
    }

    #[test_context(CourseTestContext)]
    #[test]
    fn test_missing_institution_is_an_integrity_error(ctx: &mut CourseTestContext) {
        let courses = Courses::new(&ctx.db);

        let result = courses.add(&NewCourse::new(ctx.institution_id + 100, "Orphan"));
        assert!(matches!(result, Err(TrackerError::Integrity(_))));
        assert_eq!(courses.count().unwrap(), 0);
    }

    #[test_context(CourseTestContext)]
    #[test]
    fn test_blank_name_is_rejected(ctx: &mut CourseTestContext) {
        let result = Courses::new(&ctx.db).add(&NewCourse::new(ctx.institution_id, ""));
        assert!(matches!(result, Err(TrackerError::Validation(_))));
    }

    #[test_context(CourseTestContext)]
    #[test]
    fn test_partial_update_keeps_description_and_duration(ctx: &mut CourseTestContext) {
        let courses = Courses::new(&ctx.db);
        let added = courses
            .add(
                &NewCourse::new(ctx.institution_id, "Software Engineering")
                    .description("Backend + Frontend")
                    .duration("12 months"),
            )
            .unwrap();

        let changes = CourseUpdate {
            name: Some("Software Engineering (Full Stack)".to_string()),
            ..Default::default()
        };
        let updated = courses.update(added.id, &changes).unwrap();

        assert_eq!(updated.name, "Software Engineering (Full Stack)");
        assert_eq!(updated.description.as_deref(), Some("Backend + Frontend"));
        assert_eq!(updated.duration.as_deref(), Some("12 months"));
        assert_eq!(updated.institution_id, ctx.institution_id);
    }

    #[test_context(CourseTestContext)]
    #[test]
    fn test_list_for_institution(ctx: &mut CourseTestContext) {
        let courses = Courses::new(&ctx.db);
        let other = Institutions::new(&ctx.db).add(&NewInstitution::new("Example University")).unwrap();

        courses.add(&NewCourse::new(ctx.institution_id, "Software Engineering")).unwrap();
        courses.add(&NewCourse::new(ctx.institution_id, "Data Science")).unwrap();
        courses.add(&NewCourse::new(other.id, "AI Fundamentals")).unwrap();

        let names: Vec<String> = courses
            .list_for_institution(ctx.institution_id)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Data Science", "Software Engineering"]);

        // Grouped by institution name first
        let all: Vec<String> = courses.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(all, vec!["AI Fundamentals", "Data Science", "Software Engineering"]);
    }

    #[test_context(CourseTestContext)]
    #[test]
    fn test_delete_cascades_to_certifications(ctx: &mut CourseTestContext) {
        let courses = Courses::new(&ctx.db);
        let certifications = Certifications::new(&ctx.db);
        let course = courses.add(&NewCourse::new(ctx.institution_id, "Data Science")).unwrap();
        certifications.add(&NewCertification::new(course.id, "Pandas Pro")).unwrap();
        certifications.add(&NewCertification::new(course.id, "SQL Basics")).unwrap();

        courses.delete(course.id).unwrap();

        assert!(certifications.list_for_course(course.id).unwrap().is_empty());
        assert_eq!(certifications.count().unwrap(), 0);
        assert!(Institutions::new(&ctx.db).get(ctx.institution_id).unwrap().is_some());
    }

    #[test_context(CourseTestContext)]
    #[test]
    fn test_missing_ids(ctx: &mut CourseTestContext) {
        let courses = Courses::new(&ctx.db);

        assert!(courses.get(7).unwrap().is_none());
        assert!(matches!(
            courses.update(7, &CourseUpdate::default()),
            Err(TrackerError::NotFound { entity: Entity::Course, id: 7 })
        ));
        assert!(matches!(courses.delete(7), Err(TrackerError::NotFound { entity: Entity::Course, id: 7 })));
    }
}
