//! Worked-time aggregation over a calendar-month range.
//!
//! A report walks the event log once, in log order, pairing clock-ins with
//! the following clock-out per user and summing the spans. Only events whose
//! date falls inside the range take part; a clock-out with no open clock-in
//! inside the window contributes nothing.

use crate::db::events::EventLog;
use crate::db::users::Users;
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::user::ClockStatus;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// An inclusive month-granularity date range.
///
/// The range runs from the first day of the start month to the last calendar
/// day of the end month, so `2025-01 .. 2025-02` covers January 1st through
/// February 28th and `2024-02` alone ends on the 29th.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    start_year: i32,
    start_month: u32,
    end_year: i32,
    end_month: u32,
}

impl ReportRange {
    pub fn new(start_year: i32, start_month: u32, end_year: i32, end_month: u32) -> TrackerResult<Self> {
        let range = ReportRange {
            start_year,
            start_month,
            end_year,
            end_month,
        };
        if NaiveDate::from_ymd_opt(start_year, start_month, 1).is_none() {
            return Err(TrackerError::InvalidRange(format!("{}-{:02}", start_year, start_month)));
        }
        if NaiveDate::from_ymd_opt(end_year, end_month, 1).is_none() {
            return Err(TrackerError::InvalidRange(format!("{}-{:02}", end_year, end_month)));
        }
        Ok(range)
    }

    /// Parses a `YYYY-MM` month designator.
    pub fn parse_month(month: &str) -> TrackerResult<(i32, u32)> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
            .map_err(|_| TrackerError::InvalidRange(month.to_string()))?;
        Ok((date.year(), date.month()))
    }

    /// Builds a range from two `YYYY-MM` designators.
    pub fn from_months(from: &str, to: &str) -> TrackerResult<Self> {
        let (start_year, start_month) = Self::parse_month(from)?;
        let (end_year, end_month) = Self::parse_month(to)?;
        Self::new(start_year, start_month, end_year, end_month)
    }

    /// First day of the start month.
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year, self.start_month, 1).unwrap()
    }

    /// Last calendar day of the end month: the first day of the following
    /// month, minus one day.
    pub fn end_date(&self) -> NaiveDate {
        let (year, month) = if self.end_month == 12 {
            (self.end_year + 1, 1)
        } else {
            (self.end_year, self.end_month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap().pred_opt().unwrap()
    }
}

/// One line of the worked-time report.
#[derive(Debug, Clone)]
pub struct AggregateRow {
    pub user_id: String,
    pub name: String,
    pub total: Duration,
}

/// Totals worked time per user over the range.
///
/// Rows appear in order of each user's first event inside the window; users
/// with no events in the window are absent. Display names come from the
/// directory, falling back to the name recorded on the event when the
/// directory no longer knows the id.
pub fn aggregate(users: &Users, log: &EventLog, range: &ReportRange) -> Vec<AggregateRow> {
    let start = range.start_date();
    let end = range.end_date();

    let mut rows: Vec<AggregateRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut open: HashMap<String, NaiveDateTime> = HashMap::new();

    for entry in log.entries() {
        let date = entry.time.date();
        if date < start || date > end {
            continue;
        }

        let row = *index.entry(entry.user_id.clone()).or_insert_with(|| {
            let name = users
                .find(&entry.user_id)
                .map(|user| user.name.clone())
                .unwrap_or_else(|| entry.name.clone());
            rows.push(AggregateRow {
                user_id: entry.user_id.clone(),
                name,
                total: Duration::zero(),
            });
            rows.len() - 1
        });

        match entry.status {
            ClockStatus::ClockedIn => {
                open.insert(entry.user_id.clone(), entry.time);
            }
            ClockStatus::ClockedOut => {
                // Orphan clock-outs (no open clock-in inside the window) are
                // skipped rather than paired with anything outside it.
                if let Some(clock_in) = open.remove(&entry.user_id) {
                    rows[row].total = rows[row].total + entry.time.signed_duration_since(clock_in);
                }
            }
        }
    }

    rows
}
