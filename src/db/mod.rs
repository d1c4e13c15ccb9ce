//! Persistence layer for the chronolog application.
//!
//! State lives in two JSON files, each a single array, read and written
//! wholesale. There is no incremental persistence and no locking; the
//! application assumes a single process touches the files at a time.
//!
//! - `user_database.json` holds the user directory (`Users`).
//! - `scan_log.json` holds the event log (`EventLog`).
//!
//! Both modules only manage their own collection; pairing clock-ins with
//! clock-outs and every other accounting rule lives in `libs::tracker`.

pub mod events;
pub mod users;
