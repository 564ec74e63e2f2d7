use anyhow::{Context, Result};
use std::process::Command;

/// Narrow capability surface over the operating system, so the check flow can
/// run against a fake in tests. Every call is a plain blocking
/// request/response; failures are reported to the caller, never retried here.
pub trait Host {
    /// Human-readable OS edition (e.g. "Microsoft Windows 11 Pro").
    /// `None` when the management query fails or returns nothing usable.
    fn query_os_edition(&self) -> Option<String>;

    /// Kernel/build release string, best-effort.
    fn query_kernel_release(&self) -> Option<String>;

    /// Open a settings deep-link (e.g. `ms-settings:recovery`).
    fn open_settings_panel(&self, uri: &str) -> Result<()>;
}

/// The real thing: shells out to the local OS.
pub struct SystemHost;

impl Host for SystemHost {
    fn query_os_edition(&self) -> Option<String> {
        #[cfg(windows)]
        {
            let output = Command::new("wmic")
                .args(["os", "get", "Caption"])
                .output()
                .ok()?;
            if !output.status.success() {
                return None;
            }
            second_nonempty_line(&decode_console_text(&output.stdout))
        }

        #[cfg(not(windows))]
        {
            // Closest analogue outside Windows: the distro's pretty name.
            let raw = std::fs::read_to_string("/etc/os-release").ok()?;
            for line in raw.lines() {
                if let Some(value) = line.strip_prefix("PRETTY_NAME=") {
                    let value = value.trim().trim_matches('"');
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
            None
        }
    }

    fn query_kernel_release(&self) -> Option<String> {
        #[cfg(windows)]
        let output = Command::new("cmd").args(["/c", "ver"]).output().ok()?;

        #[cfg(not(windows))]
        let output = Command::new("uname").arg("-r").output().ok()?;

        if !output.status.success() {
            return None;
        }
        let text = String::from_utf8_lossy(&output.stdout);
        let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
        Some(line.to_string())
    }

    fn open_settings_panel(&self, uri: &str) -> Result<()> {
        #[cfg(windows)]
        let status = Command::new("cmd")
            .args(["/c", "start", uri])
            .status()
            .with_context(|| format!("Failed to launch settings URI: {uri}"))?;

        #[cfg(not(windows))]
        let status = Command::new("xdg-open")
            .arg(uri)
            .status()
            .with_context(|| format!("Failed to launch settings URI: {uri}"))?;

        if !status.success() {
            anyhow::bail!("Settings launcher exited with {status}");
        }
        Ok(())
    }
}

/// wmic writes UTF-16LE (with a BOM) when its output is redirected.
#[cfg(windows)]
fn decode_console_text(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    String::from_utf8_lossy(bytes).into_owned()
}

/// WMI-style table output puts a header line first and the value on the
/// second non-empty line.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn second_nonempty_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .nth(1)
        .map(str::to_string)
}
