//! Administrative entry of an in/out pair the scanner missed.
//!
//! Times of day are combined with today's date; the pair cannot be backdated.

use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct ManualArgs {
    /// Badge identifier of the user
    user_id: String,
    /// Clock-in time of day
    #[arg(long = "in", value_name = "HH:MM:SS")]
    time_in: String,
    /// Clock-out time of day
    #[arg(long = "out", value_name = "HH:MM:SS")]
    time_out: String,
}

pub fn cmd(args: ManualArgs) -> Result<()> {
    let mut tracker = Tracker::load()?;
    let (clock_in, clock_out) = tracker.manual_entry(&args.user_id, &args.time_in, &args.time_out)?;
    tracker.save()?;

    msg_success!(Message::ManualEntryRecorded(
        clock_out.name.clone(),
        clock_in.time.format("%H:%M:%S").to_string(),
        clock_out.time.format("%H:%M:%S").to_string()
    ));
    if let Some(secs) = clock_out.duration {
        msg_info!(Message::ClockedOutWithDuration(
            clock_out.name.clone(),
            format_duration(&Duration::seconds(secs))
        ));
    }

    Ok(())
}
