use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommands,
}

#[derive(Debug, Subcommand)]
enum UserCommands {
    #[command(about = "Add a user to the directory", arg_required_else_help = true)]
    Add(AddArgs),
    #[command(about = "List users")]
    List(ListArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Badge identifier, unique within the directory
    id: String,
    /// Display name
    name: String,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Show only users currently clocked in
    #[arg(short, long)]
    clocked_in: bool,
}

pub fn cmd(args: UserArgs) -> Result<()> {
    match args.command {
        UserCommands::Add(add) => {
            let mut tracker = Tracker::load()?;
            let user = tracker.add_user(&add.id, &add.name)?;
            tracker.save()?;
            msg_success!(Message::UserAdded(user.name));
            Ok(())
        }
        UserCommands::List(list) => {
            let tracker = Tracker::load()?;
            if list.clocked_in {
                let users = tracker.users.clocked_in();
                if users.is_empty() {
                    msg_info!(Message::NoUsersClockedIn);
                    return Ok(());
                }
                View::users(users);
                msg_info!(Message::ClockedInCount(tracker.users.clocked_in_count()));
            } else {
                if tracker.users.is_empty() {
                    msg_info!(Message::NoUsersFound);
                    return Ok(());
                }
                View::users(tracker.users.all());
            }
            Ok(())
        }
    }
}
