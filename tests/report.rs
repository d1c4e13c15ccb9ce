#[cfg(test)]
mod tests {
    use chronolog::db::users::Users;
    use chronolog::libs::data_storage::DataStorage;
    use chronolog::libs::error::TrackerError;
    use chronolog::libs::report::{aggregate, ReportRange};
    use chronolog::libs::tracker::Tracker;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ReportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            ReportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ReportTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path().to_path_buf())
        }

        fn tracker(&self) -> Tracker {
            Tracker::load_from(&self.storage()).unwrap()
        }
    }

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_range_boundaries() {
        let range = ReportRange::new(2025, 1, 2025, 2).unwrap();
        assert_eq!(range.start_date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(range.end_date(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        // Leap-year February
        let range = ReportRange::new(2024, 2, 2024, 2).unwrap();
        assert_eq!(range.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        // Thirty-day month and a December year rollover
        let range = ReportRange::new(2025, 4, 2025, 12).unwrap();
        assert_eq!(range.end_date(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_range_parsing() {
        let range = ReportRange::from_months("2025-01", "2025-02").unwrap();
        assert_eq!(range.end_date(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        assert!(matches!(
            ReportRange::from_months("2025-13", "2025-13"),
            Err(TrackerError::InvalidRange(_))
        ));
        assert!(matches!(
            ReportRange::from_months("january", "2025-02"),
            Err(TrackerError::InvalidRange(_))
        ));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_users_without_events_are_excluded(ctx: &mut ReportTestContext) {
        let mut tracker = ctx.tracker();
        tracker.add_user("A1", "Alice").unwrap();
        tracker.add_user("B2", "Bob").unwrap();

        tracker.scan_at("A1", ts("2025-01-15 09:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-01-15 17:00:00")).unwrap();

        let range = ReportRange::new(2025, 1, 2025, 1).unwrap();
        let rows = tracker.aggregate(&range);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, "A1");
        assert_eq!(rows[0].total, Duration::hours(8));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_window_is_inclusive_of_both_boundary_months(ctx: &mut ReportTestContext) {
        let mut tracker = ctx.tracker();
        tracker.add_user("A1", "Alice").unwrap();
        tracker.add_user("B2", "Bob").unwrap();
        tracker.add_user("C3", "Carol").unwrap();

        // First day of the window
        tracker.scan_at("A1", ts("2025-01-01 09:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-01-01 10:00:00")).unwrap();
        // Last day of the window
        tracker.scan_at("B2", ts("2025-02-28 09:00:00")).unwrap();
        tracker.scan_at("B2", ts("2025-02-28 11:00:00")).unwrap();
        // One day past the window
        tracker.scan_at("C3", ts("2025-03-01 09:00:00")).unwrap();
        tracker.scan_at("C3", ts("2025-03-01 12:00:00")).unwrap();

        let range = ReportRange::new(2025, 1, 2025, 2).unwrap();
        let rows = tracker.aggregate(&range);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].user_id, "A1");
        assert_eq!(rows[0].total, Duration::hours(1));
        assert_eq!(rows[1].user_id, "B2");
        assert_eq!(rows[1].total, Duration::hours(2));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_orphan_clock_out_contributes_nothing(ctx: &mut ReportTestContext) {
        let mut tracker = ctx.tracker();
        tracker.add_user("A1", "Alice").unwrap();

        // A shift spanning midnight on New Year's Eve: the clock-in falls
        // outside a January window, leaving the clock-out orphaned inside it
        tracker.scan_at("A1", ts("2024-12-31 23:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-01-01 01:00:00")).unwrap();

        let range = ReportRange::new(2025, 1, 2025, 1).unwrap();
        let rows = tracker.aggregate(&range);

        // The user had an event in the window, so a row is emitted, but the
        // orphan pairs with nothing
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, Duration::zero());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_open_clock_in_contributes_nothing(ctx: &mut ReportTestContext) {
        let mut tracker = ctx.tracker();
        tracker.add_user("A1", "Alice").unwrap();

        tracker.scan_at("A1", ts("2025-01-15 09:00:00")).unwrap();

        let range = ReportRange::new(2025, 1, 2025, 1).unwrap();
        let rows = tracker.aggregate(&range);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, Duration::zero());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_multiple_pairs_are_summed(ctx: &mut ReportTestContext) {
        let mut tracker = ctx.tracker();
        tracker.add_user("A1", "Alice").unwrap();

        tracker.scan_at("A1", ts("2025-01-15 09:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-01-15 12:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-01-15 13:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-01-15 17:30:00")).unwrap();
        tracker.scan_at("A1", ts("2025-02-03 08:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-02-03 16:00:00")).unwrap();

        let range = ReportRange::new(2025, 1, 2025, 2).unwrap();
        let rows = tracker.aggregate(&range);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, Duration::hours(15) + Duration::minutes(30));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_name_falls_back_to_event_name(ctx: &mut ReportTestContext) {
        let mut tracker = ctx.tracker();
        tracker.add_user("A1", "Alice").unwrap();
        tracker.scan_at("A1", ts("2025-01-15 09:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-01-15 17:00:00")).unwrap();

        // An empty directory no longer knows the id; the name recorded on the
        // event is used instead
        let empty_dir = tempfile::tempdir().unwrap();
        let unknown = Users::load(&DataStorage::at(empty_dir.path().to_path_buf())).unwrap();
        let range = ReportRange::new(2025, 1, 2025, 1).unwrap();
        let rows = aggregate(&unknown, &tracker.log, &range);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
    }
}
