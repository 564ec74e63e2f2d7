mod cli;
mod commands;
mod config;
mod host;
mod models;
mod platform;
mod rollback;
mod ui;

use anyhow::Result;
use clap::Parser;
use std::io;

use crate::cli::{Cli, Commands};
use crate::config::load_config;
use crate::host::SystemHost;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;
    let host = SystemHost;

    // One scoped stdin handle for the whole run; released when main returns.
    let stdin = io::stdin();

    match cli.command {
        Commands::Check { dir, days, yes } => {
            let mut input = stdin.lock();
            commands::check::run(dir, days, yes, &config, &host, &mut input)?;
        }
        Commands::Open => {
            commands::open::run(&config, &host)?;
        }
    }

    Ok(())
}
