use crate::libs::data_storage::DataStorage;
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::user::{ClockStatus, User};
use std::fs::{self, File};
use std::path::PathBuf;

pub const USER_DB_FILE: &str = "user_database.json";

/// The user directory: every person known to the station and their current
/// toggle state.
///
/// Loaded wholesale from `user_database.json` and held in memory; `save`
/// overwrites the file with the full collection. A missing file is an empty
/// directory, not an error.
#[derive(Debug)]
pub struct Users {
    path: PathBuf,
    items: Vec<User>,
}

impl Users {
    pub fn load(storage: &DataStorage) -> TrackerResult<Users> {
        let path = storage.get_path(USER_DB_FILE)?;
        let items = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };

        Ok(Users { path, items })
    }

    pub fn save(&self) -> TrackerResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, &self.items)?;
        Ok(())
    }

    /// Linear lookup by id. Absence is a normal outcome.
    pub fn find(&self, id: &str) -> Option<&User> {
        self.items.iter().find(|user| user.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut User> {
        self.items.iter_mut().find(|user| user.id == id)
    }

    /// Adds a user to the directory.
    ///
    /// Ids and names are trimmed before validation; an empty value or a
    /// duplicate id is rejected and leaves the directory untouched. New users
    /// start clocked out.
    pub fn insert(&mut self, id: &str, name: &str) -> TrackerResult<&User> {
        let id = id.trim();
        let name = name.trim();

        if id.is_empty() {
            return Err(TrackerError::EmptyInput("user ID"));
        }
        if name.is_empty() {
            return Err(TrackerError::EmptyInput("user name"));
        }
        if self.find(id).is_some() {
            return Err(TrackerError::AlreadyExists(id.to_string()));
        }

        self.items.push(User::new(id, name));
        Ok(self.items.last().unwrap())
    }

    pub fn all(&self) -> &[User] {
        &self.items
    }

    /// Users currently clocked in, in directory order.
    pub fn clocked_in(&self) -> Vec<&User> {
        self.items.iter().filter(|user| user.status == ClockStatus::ClockedIn).collect()
    }

    pub fn clocked_in_count(&self) -> usize {
        self.items.iter().filter(|user| user.status == ClockStatus::ClockedIn).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
