use crate::libs::messages::Message;
use crate::libs::report::ReportRange;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Start month
    #[arg(long, value_name = "YYYY-MM")]
    from: String,
    /// End month; defaults to the start month
    #[arg(long, value_name = "YYYY-MM")]
    to: Option<String>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let to = args.to.as_deref().unwrap_or(&args.from);
    let range = ReportRange::from_months(&args.from, to)?;

    let tracker = Tracker::load()?;
    let rows = tracker.aggregate(&range);
    if rows.is_empty() {
        msg_info!(Message::NoEventsInRange);
        return Ok(());
    }

    msg_print!(
        Message::ReportHeader(range.start_date().to_string(), range.end_date().to_string()),
        true
    );
    View::report(&rows);

    Ok(())
}
