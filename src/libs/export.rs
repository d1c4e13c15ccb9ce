//! Event log export for external analysis and backup.
//!
//! The export is a verbatim serialization of the log in log order, using the
//! fixed five-column layout other tooling around the station expects:
//!
//! ```text
//! User ID,Name,Time,Status,Entry Type
//! ```
//!
//! Engine-internal fields (the durable entry id and the stored duration) are
//! not exported, keeping the file layout stable for downstream consumers.

use crate::db::events::EventLog;
use crate::libs::error::TrackerResult;
use crate::libs::event::TIME_FORMAT;
use chrono::Local;
use std::path::PathBuf;

/// CSV header, matching the columns of the log review table.
const CSV_HEADER: [&str; 5] = ["User ID", "Name", "Time", "Status", "Entry Type"];

pub struct Exporter {
    output_path: PathBuf,
}

impl Exporter {
    /// An exporter writing to `output`, or to a timestamped file in the
    /// current directory when no path is given.
    pub fn new(output: Option<PathBuf>) -> Self {
        let output_path = output.unwrap_or_else(|| {
            PathBuf::from(format!("chronolog_export_{}.csv", Local::now().format("%Y%m%d_%H%M%S")))
        });
        Exporter { output_path }
    }

    /// Writes the whole log and returns the path written to.
    pub fn export(&self, log: &EventLog) -> TrackerResult<PathBuf> {
        let mut writer = csv::Writer::from_path(&self.output_path)?;
        writer.write_record(CSV_HEADER)?;

        for entry in log.entries() {
            let time = entry.time.format(TIME_FORMAT).to_string();
            let status = entry.status.to_string();
            let entry_type = entry.entry_type.to_string();
            writer.write_record([
                entry.user_id.as_str(),
                entry.name.as_str(),
                time.as_str(),
                status.as_str(),
                entry_type.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(self.output_path.clone())
    }
}
