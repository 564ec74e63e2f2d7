use colored::Colorize;
use tabled::settings::style::Style;
use tabled::{Table, Tabled};

use crate::host::Host;
use crate::models::VersionInfo;

pub fn collect(host: &dyn Host) -> VersionInfo {
    VersionInfo {
        system: std::env::consts::OS.to_string(),
        release: host.query_kernel_release(),
        arch: std::env::consts::ARCH.to_string(),
        hostname: hostname(),
        edition: host.query_os_edition(),
    }
}

fn hostname() -> Option<String> {
    // COMPUTERNAME on Windows, HOSTNAME in most Unix shells.
    std::env::var("COMPUTERNAME")
        .or_else(|_| std::env::var("HOSTNAME"))
        .ok()
        .filter(|name| !name.is_empty())
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "FIELD")]
    field: &'static str,

    #[tabled(rename = "VALUE")]
    value: String,
}

pub fn print_report(info: &VersionInfo) {
    let mut rows = vec![
        ReportRow {
            field: "System",
            value: info.system.clone(),
        },
        ReportRow {
            field: "Arch",
            value: info.arch.clone(),
        },
    ];

    if let Some(release) = &info.release {
        rows.push(ReportRow {
            field: "Release",
            value: release.clone(),
        });
    }
    if let Some(hostname) = &info.hostname {
        rows.push(ReportRow {
            field: "Hostname",
            value: hostname.clone(),
        });
    }
    if let Some(edition) = &info.edition {
        rows.push(ReportRow {
            field: "Edition",
            value: edition.clone(),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{table}");

    if info.edition.is_none() {
        eprintln!(
            "{} Could not retrieve the OS edition; continuing without it.",
            "[!]".yellow()
        );
    }
    if info.release.is_none() {
        eprintln!(
            "{} Could not retrieve the kernel release; continuing without it.",
            "[!]".yellow()
        );
    }
}
