use filetime::{set_file_times, FileTime};
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn unique_temp_dir(tag: &str) -> std::path::PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("winback_it_{tag}_{unique}"))
}

/// Missing backup directory: no prompt, recommendation block instead.
#[test]
fn test_missing_backup_dir_shows_recommendation() {
    let dir = unique_temp_dir("missing");

    let output = Command::new("cargo")
        .args(["run", "--", "check", "-p", dir.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "Expected exit 0, got {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not found"),
        "Output did not report the missing directory. Output:\n{stdout}"
    );
    assert!(
        stdout.contains("RECOMMENDATION"),
        "Recommendation block missing. Output:\n{stdout}"
    );
    assert!(
        !stdout.contains("(y/n)"),
        "Prompt must be skipped when rollback is unavailable. Output:\n{stdout}"
    );
    assert!(
        stdout.contains("Check complete"),
        "Completion banner missing. Output:\n{stdout}"
    );
}

/// Backup directory present, prompt declined: manual steps, no launch.
#[test]
fn test_existing_backup_dir_prompts_and_declines() {
    let dir = unique_temp_dir("present");
    fs::create_dir_all(&dir).expect("Failed to create test dir");

    // Backdate the directory so the age math has something to chew on.
    let old_time = SystemTime::now() - Duration::from_secs(86400 * 100);
    let ft = FileTime::from_system_time(old_time);
    set_file_times(&dir, ft, ft).expect("Failed to backdate dir");

    let mut child = Command::new("cargo")
        .args(["run", "--", "check", "-p", dir.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(b"n\n")
        .expect("Failed to write prompt answer");

    let output = child.wait_with_output().expect("Failed to wait on command");

    fs::remove_dir(&dir).ok();

    assert!(
        output.status.success(),
        "Expected exit 0, got {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("found"),
        "Output did not report the backup directory. Output:\n{stdout}"
    );
    assert!(
        stdout.contains("(y/n)"),
        "Prompt missing for an existing backup directory. Output:\n{stdout}"
    );
    assert!(
        stdout.contains("manually"),
        "Manual fallback steps missing after declining. Output:\n{stdout}"
    );
    assert!(
        stdout.contains("Check complete"),
        "Completion banner missing. Output:\n{stdout}"
    );
}
