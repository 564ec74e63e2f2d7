use anyhow::Result;
use colored::Colorize;

use crate::host::Host;
use crate::models::Config;
use crate::ui;

/// Open the Recovery settings page directly, without the full check flow.
pub fn run(config: &Config, host: &dyn Host) -> Result<()> {
    ui::print_section("OPENING RECOVERY SETTINGS");
    println!(
        "{} Opening Settings -> Recovery ({})...",
        "[*]".blue(),
        config.settings_uri
    );

    match host.open_settings_panel(&config.settings_uri) {
        Ok(()) => {
            println!("{} Recovery settings should open now.", "✓".green());
            println!("  Look for \"Go back\" under Recovery options.");
        }
        Err(err) => {
            eprintln!("{} Could not open settings: {:#}", "✗".red(), err);
            ui::print_manual_access();
        }
    }

    Ok(())
}
