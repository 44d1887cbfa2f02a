#[cfg(test)]
mod tests {
    use certrack::db::certifications::Certifications;
    use certrack::db::courses::Courses;
    use certrack::db::db::Db;
    use certrack::db::institutions::{Institutions, NewInstitution};
    use certrack::db::reports::expiry_overview;
    use certrack::db::seed::{seed, SeedOutcome};
    use certrack::libs::status::CertificationStatus;
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SeedTestContext {
        _temp_dir: TempDir,
        db: Db,
        today: NaiveDate,
    }

    impl TestContext for SeedTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("certrack.db")).unwrap();
            SeedTestContext {
                _temp_dir: temp_dir,
                db,
                today: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            }
        }
    }

    #[test_context(SeedTestContext)]
    #[test]
    fn test_seed_fills_an_empty_database(ctx: &mut SeedTestContext) {
        let outcome = seed(&ctx.db, ctx.today).unwrap();
        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                institutions: 2,
                courses: 3,
                certifications: 3
            }
        );

        assert_eq!(Institutions::new(&ctx.db).count().unwrap(), 2);
        assert_eq!(Courses::new(&ctx.db).count().unwrap(), 3);

        let statuses: Vec<(String, CertificationStatus)> = Certifications::new(&ctx.db)
            .list_details()
            .unwrap()
            .into_iter()
            .map(|d| {
                let status = d.certification.status(ctx.today);
                (d.certification.title, status)
            })
            .collect();
        assert!(statuses.contains(&("Pandas Pro".to_string(), CertificationStatus::ExpiringSoon)));
        assert!(statuses.contains(&("Web APIs".to_string(), CertificationStatus::Valid)));
        assert!(statuses.contains(&("AI Ethics".to_string(), CertificationStatus::NoExpiry)));

        let overview = expiry_overview(&ctx.db, ctx.today).unwrap();
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].days_remaining, 30);
    }

    #[test_context(SeedTestContext)]
    #[test]
    fn test_seeding_twice_inserts_once(ctx: &mut SeedTestContext) {
        seed(&ctx.db, ctx.today).unwrap();
        assert_eq!(seed(&ctx.db, ctx.today).unwrap(), SeedOutcome::AlreadySeeded);

        assert_eq!(Institutions::new(&ctx.db).count().unwrap(), 2);
        assert_eq!(Certifications::new(&ctx.db).count().unwrap(), 3);
    }

    #[test_context(SeedTestContext)]
    #[test]
    fn test_existing_data_blocks_seeding(ctx: &mut SeedTestContext) {
        Institutions::new(&ctx.db).add(&NewInstitution::new("My School")).unwrap();

        assert_eq!(seed(&ctx.db, ctx.today).unwrap(), SeedOutcome::AlreadySeeded);
        assert_eq!(Courses::new(&ctx.db).count().unwrap(), 0);
    }
}
