use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::host::Host;
use crate::models::{BackupTimeSource, Config, WindowState};
use crate::platform;
use crate::rollback;
use crate::ui;

/// Full check flow: version report, rollback window, instructions, optional
/// settings launch. Recoverable failures are printed and never abort the run.
pub fn run(
    dir: Option<String>,
    days: Option<i64>,
    assume_yes: bool,
    config: &Config,
    host: &dyn Host,
    input: &mut dyn BufRead,
) -> Result<()> {
    let window_days = days.unwrap_or(config.window_days);
    let backup_dir: PathBuf = match dir {
        Some(path_str) => ui::expand_tilde(&path_str),
        None => config.backup_dir.clone(),
    };

    ui::print_section("WINDOWS ROLLBACK ASSISTANT");
    println!(
        "{} Always back up important data before any system rollback.",
        "[!]".yellow()
    );
    println!();

    ui::print_section("WINDOWS VERSION INFORMATION");
    let info = platform::collect(host);
    platform::print_report(&info);
    println!();

    ui::print_section("ROLLBACK AVAILABILITY CHECK");
    let status = rollback::check(&backup_dir, window_days, SystemTime::now());
    print_status(&backup_dir, window_days, &status);
    println!();

    ui::print_instructions(window_days);

    if status.available() {
        let accepted = assume_yes || ui::prompt_yes_no("Open Recovery settings now?", input);
        println!();
        if accepted {
            // Same path as `winback open`; launcher failures are recovered there.
            super::open::run(config, host)?;
        } else {
            ui::print_manual_access();
        }
    } else {
        ui::print_recommendation();
    }

    ui::print_completion_banner();
    Ok(())
}

fn print_status(backup_dir: &std::path::Path, window_days: i64, status: &crate::models::RollbackStatus) {
    if !status.exists {
        println!(
            "{} Backup directory {} not found.",
            "✗".red(),
            backup_dir.display()
        );
        println!("  Rollback is NOT available. A clean installation is required.");
        return;
    }

    println!(
        "{} Backup directory {} found.",
        "✓".green(),
        backup_dir.display()
    );
    println!("  This suggests rollback might be available.");

    match (status.created, status.elapsed_days) {
        (Some(created), Some(elapsed)) => {
            let label = match status.source {
                BackupTimeSource::Created => "Created",
                BackupTimeSource::Modified => "Modified (creation time unavailable)",
                BackupTimeSource::Unknown => "Timestamp",
            };
            println!(
                "  {}: {} ({})",
                label,
                humantime::format_rfc3339_seconds(created),
                ui::format_date_short(Some(created))
            );
            println!("  Days ago: {elapsed}");
            println!();
            match status.window {
                WindowState::Within => println!(
                    "{} ROLLBACK LIKELY AVAILABLE (within the {}-day window)",
                    "✓".green().bold(),
                    window_days
                ),
                WindowState::Expired => {
                    println!(
                        "{} ROLLBACK PERIOD EXPIRED (more than {} days)",
                        "✗".red().bold(),
                        window_days
                    );
                    println!("  You'll need a clean Windows 10 installation.");
                }
                WindowState::Unknown => {}
            }
        }
        _ => {
            eprintln!(
                "{} Could not determine the directory age; skipping window check.",
                "[!]".yellow()
            );
        }
    }
}
