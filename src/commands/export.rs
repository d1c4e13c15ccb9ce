use crate::libs::export::Exporter;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file path; a timestamped name in the current directory when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let tracker = Tracker::load()?;
    let path = Exporter::new(args.output).export(&tracker.log)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
