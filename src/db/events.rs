use crate::libs::data_storage::DataStorage;
use crate::libs::error::TrackerResult;
use crate::libs::event::Event;
use crate::libs::user::ClockStatus;
use chrono::NaiveDateTime;
use std::fs::{self, File};
use std::path::PathBuf;

pub const SCAN_LOG_FILE: &str = "scan_log.json";

/// The event log: the ordered history of every clock state change.
///
/// Entries are appended in the common path; the review operations may delete
/// or modify a single entry addressed by its id. Ids are assigned at append
/// time and are unique within the log, so a row that looks identical to
/// another can still be edited or deleted unambiguously. Files written by
/// older tools may lack ids; those entries get fresh ids on load and are
/// persisted with them on the next save.
#[derive(Debug)]
pub struct EventLog {
    path: PathBuf,
    entries: Vec<Event>,
}

impl EventLog {
    pub fn load(storage: &DataStorage) -> TrackerResult<EventLog> {
        let path = storage.get_path(SCAN_LOG_FILE)?;
        let entries: Vec<Event> = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };

        let mut log = EventLog { path, entries };
        log.assign_missing_ids();
        Ok(log)
    }

    pub fn save(&self) -> TrackerResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, &self.entries)?;
        Ok(())
    }

    fn assign_missing_ids(&mut self) {
        let mut next = self.next_id();
        for entry in self.entries.iter_mut().filter(|entry| entry.id == 0) {
            entry.id = next;
            next += 1;
        }
    }

    fn next_id(&self) -> u64 {
        self.entries.iter().map(|entry| entry.id).max().unwrap_or(0) + 1
    }

    /// Appends an event, assigning it the next free id, and returns a
    /// reference to the stored entry.
    pub fn append(&mut self, event: Event) -> &Event {
        let id = self.next_id();
        self.entries.push(Event { id, ..event });
        self.entries.last().unwrap()
    }

    pub fn find(&self, id: u64) -> Option<&Event> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Removes the entry with the given id. Exactly one entry is affected;
    /// entries that agree on every other field keep their own ids and stay.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Rewrites the time and/or status of the entry with the given id.
    pub fn modify(&mut self, id: u64, new_time: Option<NaiveDateTime>, new_status: Option<ClockStatus>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                if let Some(time) = new_time {
                    entry.time = time;
                }
                if let Some(status) = new_status {
                    entry.status = status;
                }
                true
            }
            None => false,
        }
    }

    /// Time of the most recent clock-in for a user, scanning the log backward
    /// from the end.
    ///
    /// The scan follows append order, not chronological order, so a log
    /// edited out of order pairs the way it is stored. That is the behavior
    /// every duration in the system is built on; callers must not substitute
    /// an interval search.
    pub fn last_clock_in(&self, user_id: &str) -> Option<NaiveDateTime> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.user_id == user_id && entry.status == ClockStatus::ClockedIn)
            .map(|entry| entry.time)
    }

    pub fn entries(&self) -> &[Event] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
