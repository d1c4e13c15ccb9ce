//! Review of the event log: list, delete, and edit single entries.
//!
//! Entries are addressed by the id shown in the first column of `log show`,
//! never by field matching, so a duplicate-looking row can be removed without
//! touching its twin. Both edits are immediate and have no undo.

use crate::libs::error::TrackerError;
use crate::libs::event::TIME_FORMAT;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::user::ClockStatus;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct LogArgs {
    #[command(subcommand)]
    command: LogCommands,
}

#[derive(Debug, Subcommand)]
enum LogCommands {
    #[command(about = "Show the event log")]
    Show,
    #[command(about = "Delete a log entry by id", arg_required_else_help = true)]
    Delete(DeleteArgs),
    #[command(about = "Edit a log entry's time or status", arg_required_else_help = true)]
    Edit(EditArgs),
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Entry id, as shown by `log show`
    id: u64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
struct EditArgs {
    /// Entry id, as shown by `log show`
    id: u64,
    /// New timestamp
    #[arg(long, value_name = "YYYY-MM-DD HH:MM:SS")]
    time: Option<String>,
    /// New status: clocked_in or clocked_out
    #[arg(long, value_name = "STATUS")]
    status: Option<String>,
}

pub fn cmd(args: LogArgs) -> Result<()> {
    match args.command {
        LogCommands::Show => {
            let tracker = Tracker::load()?;
            if tracker.log.is_empty() {
                msg_info!(Message::LogEmpty);
                return Ok(());
            }
            View::log(tracker.log.entries());
            Ok(())
        }
        LogCommands::Delete(delete) => {
            let mut tracker = Tracker::load()?;

            if !delete.yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteEntry(delete.id).to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    msg_info!(Message::OperationCancelled);
                    return Ok(());
                }
            }

            tracker.delete_event(delete.id)?;
            tracker.save()?;
            msg_success!(Message::EntryDeleted(delete.id));
            Ok(())
        }
        LogCommands::Edit(edit) => {
            if edit.time.is_none() && edit.status.is_none() {
                msg_bail_anyhow!(Message::NothingToModify);
            }

            let new_time = match &edit.time {
                Some(time) => Some(
                    NaiveDateTime::parse_from_str(time, TIME_FORMAT)
                        .map_err(|_| TrackerError::InvalidTime(time.clone()))?,
                ),
                None => None,
            };
            let new_status = match &edit.status {
                Some(status) => {
                    Some(ClockStatus::parse(status).ok_or_else(|| TrackerError::InvalidStatus(status.clone()))?)
                }
                None => None,
            };

            let mut tracker = Tracker::load()?;
            tracker.modify_event(edit.id, new_time, new_status)?;
            tracker.save()?;
            msg_success!(Message::EntryModified(edit.id));
            Ok(())
        }
    }
}
