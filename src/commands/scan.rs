//! The primary scan action: one badge identifier in, one state toggle out.

use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::user::ClockStatus;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Badge identifier of the user
    user_id: String,
}

pub fn cmd(args: ScanArgs) -> Result<()> {
    let mut tracker = Tracker::load()?;
    let event = tracker.scan(&args.user_id)?;
    tracker.save()?;

    match event.status {
        ClockStatus::ClockedIn => msg_success!(Message::ClockedIn(event.name.clone())),
        ClockStatus::ClockedOut => match event.duration {
            Some(secs) => msg_success!(Message::ClockedOutWithDuration(
                event.name.clone(),
                format_duration(&Duration::seconds(secs))
            )),
            None => msg_success!(Message::ClockedOut(event.name.clone())),
        },
    }
    msg_info!(Message::ClockedInCount(tracker.users.clocked_in_count()));

    Ok(())
}
