use std::path::PathBuf;
use std::time::SystemTime;

/// Which directory timestamp the rollback age was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupTimeSource {
    Created,
    Modified,
    Unknown,
}

/// Classification of the backup directory's age against the rollback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Age is within the rollback window; the OS should still offer "Go back".
    Within,
    /// Older than the window; the OS has likely removed the revert option.
    Expired,
    /// The directory timestamp could not be read.
    Unknown,
}

/// Result of inspecting the backup-of-previous-install directory.
///
/// `exists` alone drives "rollback available" downstream; the window state is
/// informational and only printed next to it. An expired window still counts
/// as available because the directory is the only signal the OS leaves behind.
#[derive(Debug, Clone, Copy)]
pub struct RollbackStatus {
    pub exists: bool,
    pub created: Option<SystemTime>,
    pub source: BackupTimeSource,
    pub elapsed_days: Option<i64>,
    pub window: WindowState,
}

impl RollbackStatus {
    pub fn available(&self) -> bool {
        self.exists
    }
}

/// Local platform details shown in the version report. Everything except
/// `system` and `arch` is best-effort and may be absent.
#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub system: String,
    pub release: Option<String>,
    pub arch: String,
    pub hostname: Option<String>,
    pub edition: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory left behind by an in-place upgrade (the rollback signal).
    pub backup_dir: PathBuf,
    /// Days after the upgrade during which the OS offers an in-place revert.
    pub window_days: i64,
    /// Settings deep-link opened when the user accepts the prompt.
    pub settings_uri: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup_dir: PathBuf::from(r"C:\Windows.old"),
            window_days: 10,
            settings_uri: String::from("ms-settings:recovery"),
        }
    }
}
