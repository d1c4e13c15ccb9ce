#[cfg(test)]
mod tests {
    use chronolog::db::users::Users;
    use chronolog::libs::data_storage::DataStorage;
    use chronolog::libs::error::TrackerError;
    use chronolog::libs::user::ClockStatus;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct UsersTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for UsersTestContext {
        fn setup() -> Self {
            UsersTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl UsersTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path().to_path_buf())
        }
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_insert_and_find(ctx: &mut UsersTestContext) {
        let mut users = Users::load(&ctx.storage()).unwrap();

        users.insert("A1", "Alice").unwrap();
        let user = users.find("A1").unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.status, ClockStatus::ClockedOut);

        assert!(users.find("B2").is_none());
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_duplicate_id_is_rejected(ctx: &mut UsersTestContext) {
        let mut users = Users::load(&ctx.storage()).unwrap();

        users.insert("A1", "Alice").unwrap();
        let err = users.insert("A1", "Bob").unwrap_err();
        assert!(matches!(err, TrackerError::AlreadyExists(id) if id == "A1"));

        // The directory still holds exactly the first user
        assert_eq!(users.all().len(), 1);
        assert_eq!(users.find("A1").unwrap().name, "Alice");
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_empty_inputs_are_rejected(ctx: &mut UsersTestContext) {
        let mut users = Users::load(&ctx.storage()).unwrap();

        assert!(matches!(users.insert("", "Alice"), Err(TrackerError::EmptyInput(_))));
        assert!(matches!(users.insert("  ", "Alice"), Err(TrackerError::EmptyInput(_))));
        assert!(matches!(users.insert("A1", ""), Err(TrackerError::EmptyInput(_))));
        assert!(users.is_empty());
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_clocked_in_count(ctx: &mut UsersTestContext) {
        let mut users = Users::load(&ctx.storage()).unwrap();

        users.insert("A1", "Alice").unwrap();
        users.insert("B2", "Bob").unwrap();
        assert_eq!(users.clocked_in_count(), 0);

        users.find_mut("A1").unwrap().status = ClockStatus::ClockedIn;
        assert_eq!(users.clocked_in_count(), 1);
        assert_eq!(users.clocked_in()[0].id, "A1");
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_save_and_reload(ctx: &mut UsersTestContext) {
        let storage = ctx.storage();

        let mut users = Users::load(&storage).unwrap();
        users.insert("A1", "Alice").unwrap();
        users.find_mut("A1").unwrap().status = ClockStatus::ClockedIn;
        users.save().unwrap();

        let reloaded = Users::load(&storage).unwrap();
        assert_eq!(reloaded.all().len(), 1);
        let user = reloaded.find("A1").unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.status, ClockStatus::ClockedIn);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_missing_file_is_empty_directory(ctx: &mut UsersTestContext) {
        let users = Users::load(&ctx.storage()).unwrap();
        assert!(users.is_empty());
    }
}
