pub mod checkout;
pub mod export;
pub mod init;
pub mod log;
pub mod manual;
pub mod report;
pub mod scan;
pub mod user;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Toggle a user's clock state", arg_required_else_help = true)]
    Scan(scan::ScanArgs),
    #[command(about = "Manage the user directory")]
    User(user::UserArgs),
    #[command(about = "Record a manual in/out pair for today", arg_required_else_help = true)]
    Manual(manual::ManualArgs),
    #[command(about = "Clock out one user, or everyone still in")]
    Checkout(checkout::CheckoutArgs),
    #[command(about = "Aggregate worked time over a month range", arg_required_else_help = true)]
    Report(report::ReportArgs),
    #[command(about = "Review, edit, or delete log entries")]
    Log(log::LogArgs),
    #[command(about = "Export the event log to CSV")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Scan(args) => scan::cmd(args),
            Commands::User(args) => user::cmd(args),
            Commands::Manual(args) => manual::cmd(args),
            Commands::Checkout(args) => checkout::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
