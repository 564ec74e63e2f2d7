use clap::{Parser, Subcommand};

mod help;

#[derive(Parser)]
#[command(name = "winback")]
#[command(
    about = "Check the Windows rollback window and open Recovery settings",
    long_about = help::TOP_LONG_ABOUT,
    after_help = help::TOP_AFTER_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report the OS version and whether the rollback window is still open
    #[command(long_about = help::CHECK_LONG_ABOUT, after_help = help::CHECK_AFTER_HELP)]
    Check {
        /// Backup directory to inspect (e.g., C:\Windows.old)
        #[arg(short = 'p', long)]
        dir: Option<String>,
        /// Rollback window length in days
        #[arg(short, long)]
        days: Option<i64>,

        /// Assume "yes" at the Recovery-settings prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Open the Recovery settings page directly
    #[command(after_help = help::OPEN_AFTER_HELP)]
    Open,
}
