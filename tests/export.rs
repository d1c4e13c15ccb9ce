#[cfg(test)]
mod tests {
    use chronolog::libs::data_storage::DataStorage;
    use chronolog::libs::export::Exporter;
    use chronolog::libs::tracker::Tracker;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ExportTestContext {
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

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let mut tracker = ctx.tracker();
        tracker.add_user("A1", "Alice").unwrap();
        tracker.scan_at("A1", ts("2025-01-15 09:00:00")).unwrap();
        tracker.scan_at("A1", ts("2025-01-15 17:30:00")).unwrap();

        let output_path = ctx.temp_dir.path().join("export.csv");
        let written = Exporter::new(Some(output_path.clone())).export(&tracker.log).unwrap();
        assert_eq!(written, output_path);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "User ID,Name,Time,Status,Entry Type");
        assert_eq!(lines[1], "A1,Alice,2025-01-15 09:00:00,clocked_in,Scan");
        assert_eq!(lines[2], "A1,Alice,2025-01-15 17:30:00,clocked_out,Scan");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_log_writes_header_only(ctx: &mut ExportTestContext) {
        let tracker = ctx.tracker();

        let output_path = ctx.temp_dir.path().join("empty.csv");
        Exporter::new(Some(output_path.clone())).export(&tracker.log).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert_eq!(content.lines().next().unwrap(), "User ID,Name,Time,Status,Entry Type");
    }
}
