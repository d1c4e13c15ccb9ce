use crate::libs::user::ClockStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used everywhere: log file, tables, CSV export.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Origin of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Produced by the primary scan action.
    Scan,
    /// Produced by an administrative action (manual entry, checkout).
    Manual,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One clock state change in the event log.
///
/// `id` is assigned by the log at append time and is the only handle the
/// edit/delete operations accept; two events that agree on every other field
/// still have distinct ids. `duration` is filled on clock-out events when a
/// pairing clock-in was found, in whole seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: u64,
    pub user_id: String,
    pub name: String,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    pub status: ClockStatus,
    pub entry_type: EntryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl Event {
    pub fn new(user_id: &str, name: &str, time: NaiveDateTime, status: ClockStatus, entry_type: EntryType) -> Self {
        Event {
            id: 0,
            user_id: user_id.to_string(),
            name: name.to_string(),
            time,
            status,
            entry_type,
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: Option<i64>) -> Self {
        self.duration = duration;
        self
    }
}

/// Serde adapter keeping `time` in the `YYYY-MM-DD HH:MM:SS` layout the data
/// files have always used.
pub mod timestamp {
    use super::TIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
