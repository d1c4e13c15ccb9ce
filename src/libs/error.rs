//! Typed failures for the attendance engine.
//!
//! Every engine operation returns `TrackerError` so the command layer can
//! surface each case as a distinct user-facing message. None of these are
//! fatal; commands report them and exit nonzero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("user with ID {0} not found")]
    NotFound(String),

    #[error("user with ID {0} already exists")]
    AlreadyExists(String),

    #[error("user {0} is not clocked in")]
    NotClockedIn(String),

    #[error("log entry {0} not found")]
    EntryNotFound(u64),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("invalid status: {0} (expected clocked_in or clocked_out)")]
    InvalidStatus(String),

    #[error("invalid report range: {0}")]
    InvalidRange(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
