//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard. Chronolog works with zero setup; the
//! only thing to configure is where the data files live.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

pub fn cmd(_init_args: InitArgs) -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}
