//! # Chronolog - Attendance Time Clock
//!
//! A command-line time clock for a single site: users scan or type an
//! identifier to toggle their clocked-in state, administrators maintain the
//! user directory and the event log, and worked time can be aggregated per
//! user over any month range.
//!
//! ## Features
//!
//! - **Scan Toggle**: One action flips a user between clocked in and out
//! - **User Directory**: Badge id to display name mapping with current state
//! - **Manual Entries**: Administrative in/out pairs for missed scans
//! - **Bulk Checkout**: Clock out everyone still in at end of day
//! - **Log Review**: List, edit, and delete individual log entries by id
//! - **Reports**: Worked-time totals per user over a calendar-month range
//! - **Export**: Five-column CSV of the full event log
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chronolog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
