#[cfg(test)]
mod tests {
    use certrack::db::certifications::{CertificationUpdate, Certifications, NewCertification};
    use certrack::db::courses::{Courses, NewCourse};
    use certrack::db::db::Db;
    use certrack::db::error::{Entity, TrackerError};
    use certrack::db::institutions::{Institutions, NewInstitution};
    use certrack::libs::status::CertificationStatus;
    use chrono::{Duration, NaiveDate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CertificationTestContext {
        _temp_dir: TempDir,
        db: Db,
        course_id: i64,
        today: NaiveDate,
    }

    impl TestContext for CertificationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("certrack.db")).unwrap();
            let school = Institutions::new(&db).add(&NewInstitution::new("Moringa School")).unwrap();
            let course = Courses::new(&db).add(&NewCourse::new(school.id, "Data Science")).unwrap();
            CertificationTestContext {
                _temp_dir: temp_dir,
                db,
                course_id: course.id,
                today: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(CertificationTestContext)]
    #[test]
    fn test_dates_round_trip(ctx: &mut CertificationTestContext) {
        let certifications = Certifications::new(&ctx.db);

        let added = certifications
            .add(
                &NewCertification::new(ctx.course_id, "Pandas Pro")
                    .level("Associate")
                    .issued(date(2024, 6, 15))
                    .expires(date(2025, 6, 15)),
            )
            .unwrap();

        let fetched = certifications.get(added.id).unwrap().unwrap();
        assert_eq!(fetched, added);
        assert_eq!(fetched.issue_date, Some(date(2024, 6, 15)));
        assert_eq!(fetched.expiry_date, Some(date(2025, 6, 15)));
        assert_eq!(fetched.level.as_deref(), Some("Associate"));

        // Stored as ISO text
        let raw: String = ctx
            .db
            .session()
            .unwrap()
            .query_row("SELECT expiry_date FROM certifications WHERE id = ?1", [added.id], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "2025-06-15");
    }

    #[test_context(CertificationTestContext)]
    #[test]
    fn test_status_follows_expiry_date(ctx: &mut CertificationTestContext) {
        let certifications = Certifications::new(&ctx.db);
        let today = ctx.today;

        let cases = [
            (None, CertificationStatus::NoExpiry),
            (Some(today - Duration::days(1)), CertificationStatus::Expired),
            (Some(today), CertificationStatus::ExpiringSoon),
            (Some(today + Duration::days(30)), CertificationStatus::ExpiringSoon),
            (Some(today + Duration::days(31)), CertificationStatus::Valid),
        ];
        for (expiry, expected) in cases {
            let mut new = NewCertification::new(ctx.course_id, "Sample");
            new.expiry_date = expiry;
            let added = certifications.add(&new).unwrap();
            assert_eq!(added.status(today), expected, "expiry {:?}", expiry);
        }
    }

    #[test_context(CertificationTestContext)]
    #[test]
    fn test_missing_course_is_an_integrity_error(ctx: &mut CertificationTestContext) {
        let certifications = Certifications::new(&ctx.db);

        let result = certifications.add(&NewCertification::new(ctx.course_id + 50, "Orphan"));
        assert!(matches!(result, Err(TrackerError::Integrity(_))));
        assert_eq!(certifications.count().unwrap(), 0);
    }

    #[test_context(CertificationTestContext)]
    #[test]
    fn test_update_can_clear_expiry(ctx: &mut CertificationTestContext) {
        let certifications = Certifications::new(&ctx.db);
        let added = certifications
            .add(
                &NewCertification::new(ctx.course_id, "Web APIs")
                    .issued(date(2024, 1, 1))
                    .expires(date(2025, 2, 1)),
            )
            .unwrap();

        let changes = CertificationUpdate {
            expiry_date: Some(None),
            ..Default::default()
        };
        let updated = certifications.update(added.id, &changes).unwrap();

        assert_eq!(updated.expiry_date, None);
        assert_eq!(updated.issue_date, Some(date(2024, 1, 1)));
        assert_eq!(updated.title, "Web APIs");
        assert_eq!(updated.status(ctx.today), CertificationStatus::NoExpiry);
        assert_eq!(certifications.get(added.id).unwrap().unwrap(), updated);
    }

    #[test_context(CertificationTestContext)]
    #[test]
    fn test_update_replaces_only_given_fields(ctx: &mut CertificationTestContext) {
        let certifications = Certifications::new(&ctx.db);
        let added = certifications
            .add(&NewCertification::new(ctx.course_id, "AI Ethics").level("Associate"))
            .unwrap();

        let changes = CertificationUpdate {
            level: Some("Professional".to_string()),
            expiry_date: Some(Some(date(2026, 3, 1))),
            ..Default::default()
        };
        let updated = certifications.update(added.id, &changes).unwrap();

        assert_eq!(updated.title, "AI Ethics");
        assert_eq!(updated.level.as_deref(), Some("Professional"));
        assert_eq!(updated.issue_date, None);
        assert_eq!(updated.expiry_date, Some(date(2026, 3, 1)));
    }

    #[test_context(CertificationTestContext)]
    #[test]
    fn test_list_by_expiry_puts_undated_last(ctx: &mut CertificationTestContext) {
        let certifications = Certifications::new(&ctx.db);
        certifications.add(&NewCertification::new(ctx.course_id, "No Expiry")).unwrap();
        certifications
            .add(&NewCertification::new(ctx.course_id, "Later").expires(date(2025, 9, 1)))
            .unwrap();
        certifications
            .add(&NewCertification::new(ctx.course_id, "Sooner").expires(date(2025, 2, 1)))
            .unwrap();

        let titles: Vec<String> = certifications
            .list_by_expiry(None)
            .unwrap()
            .into_iter()
            .map(|d| d.certification.title)
            .collect();
        assert_eq!(titles, vec!["Sooner", "Later", "No Expiry"]);

        let within: Vec<String> = certifications
            .list_by_expiry(Some(date(2025, 3, 1)))
            .unwrap()
            .into_iter()
            .map(|d| d.certification.title)
            .collect();
        assert_eq!(within, vec!["Sooner"]);
    }

    #[test_context(CertificationTestContext)]
    #[test]
    fn test_details_carry_course_and_institution_names(ctx: &mut CertificationTestContext) {
        let certifications = Certifications::new(&ctx.db);
        certifications.add(&NewCertification::new(ctx.course_id, "Pandas Pro")).unwrap();

        let details = certifications.list_details().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].course_name, "Data Science");
        assert_eq!(details[0].institution_name, "Moringa School");
    }

    #[test_context(CertificationTestContext)]
    #[test]
    fn test_missing_ids(ctx: &mut CertificationTestContext) {
        let certifications = Certifications::new(&ctx.db);

        assert!(certifications.get(3).unwrap().is_none());
        assert!(matches!(
            certifications.update(3, &CertificationUpdate::default()),
            Err(TrackerError::NotFound { entity: Entity::Certification, id: 3 })
        ));
        assert!(matches!(
            certifications.delete(3),
            Err(TrackerError::NotFound { entity: Entity::Certification, id: 3 })
        ));
    }
}
