use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Duration;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Badge identifier of the user to clock out
    #[arg(required_unless_present = "all")]
    user_id: Option<String>,
    /// Clock out every user currently clocked in
    #[arg(short, long, conflicts_with = "user_id")]
    all: bool,
}

pub fn cmd(args: CheckoutArgs) -> Result<()> {
    let mut tracker = Tracker::load()?;

    if args.all {
        if tracker.users.clocked_in_count() == 0 {
            msg_info!(Message::NoUsersClockedIn);
            return Ok(());
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmCheckoutAll.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        let count = tracker.checkout_all();
        tracker.save()?;
        msg_success!(Message::AllUsersClockedOut(count));
        return Ok(());
    }

    // required_unless_present guarantees an id when --all is absent
    let user_id = args.user_id.unwrap_or_default();
    let event = tracker.checkout(&user_id)?;
    tracker.save()?;

    match event.duration {
        Some(secs) => msg_success!(Message::ClockedOutWithDuration(
            event.name.clone(),
            format_duration(&Duration::seconds(secs))
        )),
        None => msg_success!(Message::ClockedOut(event.name.clone())),
    }
    msg_info!(Message::ClockedInCount(tracker.users.clocked_in_count()));

    Ok(())
}
