//! Text for every user-facing message.
//!
//! Keeping the whole catalog behind one `Display` impl means commands never
//! format strings ad hoc, and the wording of any message can be changed in
//! exactly one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === USER DIRECTORY MESSAGES ===
            Message::UserAdded(name) => format!("User '{}' added", name),
            Message::NoUsersFound => "No users in the directory yet".to_string(),
            Message::ClockedInCount(count) => format!("{} users currently clocked in", count),

            // === SCAN MESSAGES ===
            Message::ClockedIn(name) => format!("{} clocked in", name),
            Message::ClockedOut(name) => format!("{} clocked out", name),
            Message::ClockedOutWithDuration(name, duration) => {
                format!("{} clocked out, was clocked in for {}", name, duration)
            }

            // === MANUAL ENTRY MESSAGES ===
            Message::ManualEntryRecorded(name, time_in, time_out) => {
                format!("Recorded manual entry for {}: {} to {}", name, time_in, time_out)
            }

            // === CHECKOUT MESSAGES ===
            Message::NoUsersClockedIn => "There are no users currently clocked in".to_string(),
            Message::AllUsersClockedOut(count) => format!("Clocked out {} users", count),
            Message::ConfirmCheckoutAll => "Clock out all users?".to_string(),

            // === LOG REVIEW MESSAGES ===
            Message::LogEmpty => "The event log is empty".to_string(),
            Message::EntryDeleted(id) => format!("Entry {} deleted", id),
            Message::EntryModified(id) => format!("Entry {} modified", id),
            Message::ConfirmDeleteEntry(id) => format!("Delete entry {}?", id),
            Message::NothingToModify => "Specify a new time and/or a new status".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(start, end) => format!("Worked time from {} to {}", start, end),
            Message::NoEventsInRange => "No events in the selected range".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Log exported to {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::PromptDataDir => "Data directory (empty for the platform default)".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", message)
    }
}
