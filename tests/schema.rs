#[cfg(test)]
mod tests {
    use certrack::db::db::Db;
    use certrack::db::error::TrackerError;
    use certrack::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SchemaTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for SchemaTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("certrack.db")).unwrap();
            SchemaTestContext { temp_dir, db }
        }
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_schema_is_created_on_open(ctx: &mut SchemaTestContext) {
        let conn = ctx.db.session().unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap();
        let tables: Vec<String> = stmt.query_map([], |row| row.get(0)).unwrap().map(|r| r.unwrap()).collect();

        assert_eq!(tables, vec!["certifications", "courses", "institutions", "migrations"]);
        assert_eq!(get_db_version(&conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&conn).unwrap());
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_initialize_twice_is_a_no_op(ctx: &mut SchemaTestContext) {
        ctx.db.initialize().unwrap();
        ctx.db.initialize().unwrap();

        let reopened = Db::open(ctx.temp_dir.path().join("certrack.db")).unwrap();
        assert_eq!(reopened.schema_version().unwrap(), 1);

        let conn = reopened.session().unwrap();
        let history = MigrationManager::new().get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].0, 1);
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_each_session_enforces_foreign_keys(ctx: &mut SchemaTestContext) {
        let conn = ctx.db.session().unwrap();
        let enabled: i64 = conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0)).unwrap();
        assert_eq!(enabled, 1);

        let orphan = conn.execute("INSERT INTO courses (institution_id, name) VALUES (999, 'Orphan')", []);
        assert!(orphan.is_err());
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_unreadable_schema_version_is_an_error(ctx: &mut SchemaTestContext) {
        let conn = ctx.db.session().unwrap();
        conn.execute("UPDATE migrations SET version = 'garbage'", []).unwrap();
        drop(conn);

        assert!(matches!(ctx.db.schema_version(), Err(TrackerError::Database(_))));
        assert!(Db::open(ctx.temp_dir.path().join("certrack.db")).is_err());

        // Nothing was re-applied on top of the broken bookkeeping
        let conn = ctx.db.session().unwrap();
        let rows: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(rows, 1);
    }
}
