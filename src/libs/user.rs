use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance toggle state of a user.
///
/// Persisted verbatim as `clocked_in` / `clocked_out` in both the user
/// directory and the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStatus {
    ClockedIn,
    ClockedOut,
}

impl ClockStatus {
    /// The opposite state, used by the scan toggle.
    pub fn toggled(self) -> Self {
        match self {
            ClockStatus::ClockedIn => ClockStatus::ClockedOut,
            ClockStatus::ClockedOut => ClockStatus::ClockedIn,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "clocked_in" => Some(ClockStatus::ClockedIn),
            "clocked_out" => Some(ClockStatus::ClockedOut),
            _ => None,
        }
    }
}

impl fmt::Display for ClockStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClockStatus::ClockedIn => write!(f, "clocked_in"),
            ClockStatus::ClockedOut => write!(f, "clocked_out"),
        }
    }
}

/// A directory entry: one person who can clock in and out.
///
/// The `id` is the user-supplied badge identifier and is unique within the
/// directory. `status` mirrors the newest log event for this user and is kept
/// in sync by every engine operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub status: ClockStatus,
}

impl User {
    /// New users always start clocked out.
    pub fn new(id: &str, name: &str) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            status: ClockStatus::ClockedOut,
        }
    }
}
