//! The attendance engine.
//!
//! `Tracker` owns the two persistent collections (user directory and event
//! log) and exposes every operation the command layer may invoke. Commands
//! hold a `Tracker`, call one operation, then `save`; nothing outside this
//! module mutates attendance state.
//!
//! ## Duration accounting
//!
//! Whenever a user transitions to clocked-out through `scan`, `manual_entry`,
//! or `checkout`, the engine pairs the transition with the most recent
//! clocked-in event found by scanning the log backward from the end
//! (`EventLog::last_clock_in`) and stores the resulting span on the appended
//! clock-out event. When no clock-in exists, the clock-out is recorded with
//! no duration and no complaint; that silence is deliberate.
//!
//! `checkout_all` is the exception: it closes every open user without
//! computing durations, mirroring how bulk closure has always behaved.
//!
//! ## Time injection
//!
//! Public operations stamp events with the current wall clock at second
//! precision. Each has an `_at` / `_on` twin taking the timestamp or date
//! explicitly; tests use those to stay deterministic.

use crate::db::events::EventLog;
use crate::db::users::Users;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::event::{EntryType, Event};
use crate::libs::report::{self, AggregateRow, ReportRange};
use crate::libs::user::{ClockStatus, User};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub struct Tracker {
    pub users: Users,
    pub log: EventLog,
}

impl Tracker {
    /// Loads both collections from the configured data directory.
    pub fn load() -> Result<Tracker> {
        let config = Config::read()?;
        Ok(Self::load_from(&config.storage())?)
    }

    /// Loads both collections from an explicit storage root.
    pub fn load_from(storage: &DataStorage) -> TrackerResult<Tracker> {
        Ok(Tracker {
            users: Users::load(storage)?,
            log: EventLog::load(storage)?,
        })
    }

    /// Persists both collections wholesale. This is the only durable commit
    /// point; an operation abandoned before `save` leaves the files as they
    /// were.
    pub fn save(&self) -> TrackerResult<()> {
        self.users.save()?;
        self.log.save()?;
        Ok(())
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.find(id)
    }

    pub fn add_user(&mut self, id: &str, name: &str) -> TrackerResult<User> {
        self.users.insert(id, name).map(|user| user.clone())
    }

    /// The scan toggle: flips the user's state and appends one `Scan` event.
    pub fn scan(&mut self, user_id: &str) -> TrackerResult<Event> {
        self.scan_at(user_id, now())
    }

    pub fn scan_at(&mut self, user_id: &str, time: NaiveDateTime) -> TrackerResult<Event> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(TrackerError::EmptyInput("user ID"));
        }
        let user = self
            .users
            .find_mut(user_id)
            .ok_or_else(|| TrackerError::NotFound(user_id.to_string()))?;

        user.status = user.status.toggled();
        let status = user.status;
        let name = user.name.clone();

        let duration = match status {
            ClockStatus::ClockedOut => self.duration_since_last_clock_in(user_id, time),
            ClockStatus::ClockedIn => None,
        };

        let event = Event::new(user_id, &name, time, status, EntryType::Scan)
            .with_duration(duration.map(|d| d.num_seconds()));
        Ok(self.log.append(event).clone())
    }

    /// Span between `clock_out` and the nearest preceding clock-in event for
    /// the user, by backward scan from the log end. `None` when the user has
    /// never clocked in.
    pub fn duration_since_last_clock_in(&self, user_id: &str, clock_out: NaiveDateTime) -> Option<Duration> {
        self.log
            .last_clock_in(user_id)
            .map(|clock_in| clock_out.signed_duration_since(clock_in))
    }

    /// Records an administrative in/out pair for today.
    ///
    /// Times are `HH:MM:SS` strings combined with the current calendar date;
    /// there is no way to backdate an entry. The user's state is forced to
    /// clocked-out whether or not they were clocked in.
    pub fn manual_entry(&mut self, user_id: &str, time_in: &str, time_out: &str) -> TrackerResult<(Event, Event)> {
        self.manual_entry_on(user_id, now().date(), time_in, time_out)
    }

    pub fn manual_entry_on(
        &mut self,
        user_id: &str,
        date: NaiveDate,
        time_in: &str,
        time_out: &str,
    ) -> TrackerResult<(Event, Event)> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(TrackerError::EmptyInput("user ID"));
        }
        let time_in = parse_time_of_day(time_in, "time in")?;
        let time_out = parse_time_of_day(time_out, "time out")?;

        let user = self
            .users
            .find_mut(user_id)
            .ok_or_else(|| TrackerError::NotFound(user_id.to_string()))?;
        user.status = ClockStatus::ClockedOut;
        let name = user.name.clone();

        let time_in = date.and_time(time_in);
        let time_out = date.and_time(time_out);

        // Pairing runs against the log as it stands, before either new event
        // is appended, exactly like every other clock-out.
        let duration = self.duration_since_last_clock_in(user_id, time_out);

        let clock_in = self
            .log
            .append(Event::new(user_id, &name, time_in, ClockStatus::ClockedIn, EntryType::Manual))
            .clone();
        let clock_out = self
            .log
            .append(
                Event::new(user_id, &name, time_out, ClockStatus::ClockedOut, EntryType::Manual)
                    .with_duration(duration.map(|d| d.num_seconds())),
            )
            .clone();

        Ok((clock_in, clock_out))
    }

    /// Clocks out one currently clocked-in user with a `Manual` event,
    /// computing the duration like a scan would.
    pub fn checkout(&mut self, user_id: &str) -> TrackerResult<Event> {
        self.checkout_at(user_id, now())
    }

    pub fn checkout_at(&mut self, user_id: &str, time: NaiveDateTime) -> TrackerResult<Event> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(TrackerError::EmptyInput("user ID"));
        }
        let user = self
            .users
            .find_mut(user_id)
            .ok_or_else(|| TrackerError::NotFound(user_id.to_string()))?;
        if user.status != ClockStatus::ClockedIn {
            return Err(TrackerError::NotClockedIn(user_id.to_string()));
        }

        user.status = ClockStatus::ClockedOut;
        let name = user.name.clone();

        let duration = self.duration_since_last_clock_in(user_id, time);
        let event = Event::new(user_id, &name, time, ClockStatus::ClockedOut, EntryType::Manual)
            .with_duration(duration.map(|d| d.num_seconds()));
        Ok(self.log.append(event).clone())
    }

    /// Clocks out every clocked-in user with one `Manual` event each, all
    /// stamped with the same instant and carrying no duration. Returns how
    /// many users were closed; appends nothing when nobody is clocked in.
    pub fn checkout_all(&mut self) -> usize {
        self.checkout_all_at(now())
    }

    pub fn checkout_all_at(&mut self, time: NaiveDateTime) -> usize {
        let pending: Vec<(String, String)> = self
            .users
            .clocked_in()
            .iter()
            .map(|user| (user.id.clone(), user.name.clone()))
            .collect();

        for (id, name) in &pending {
            if let Some(user) = self.users.find_mut(id) {
                user.status = ClockStatus::ClockedOut;
            }
            self.log
                .append(Event::new(id, name, time, ClockStatus::ClockedOut, EntryType::Manual));
        }

        pending.len()
    }

    /// Worked-time totals per user over an inclusive month range.
    pub fn aggregate(&self, range: &ReportRange) -> Vec<AggregateRow> {
        report::aggregate(&self.users, &self.log, range)
    }

    pub fn delete_event(&mut self, id: u64) -> TrackerResult<()> {
        if self.log.delete(id) {
            Ok(())
        } else {
            Err(TrackerError::EntryNotFound(id))
        }
    }

    pub fn modify_event(
        &mut self,
        id: u64,
        new_time: Option<NaiveDateTime>,
        new_status: Option<ClockStatus>,
    ) -> TrackerResult<()> {
        if self.log.modify(id, new_time, new_status) {
            Ok(())
        } else {
            Err(TrackerError::EntryNotFound(id))
        }
    }
}

/// Current wall clock at second precision, the resolution everything in the
/// log is stored at.
fn now() -> NaiveDateTime {
    Local::now().naive_local().with_nanosecond(0).unwrap()
}

fn parse_time_of_day(input: &str, field: &'static str) -> TrackerResult<NaiveTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TrackerError::EmptyInput(field));
    }
    NaiveTime::parse_from_str(input, "%H:%M:%S").map_err(|_| TrackerError::InvalidTime(input.to_string()))
}
