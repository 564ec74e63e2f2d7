use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::BufRead;
use std::path::PathBuf;

/// Section rule + title, shared by every command.
pub fn print_section(title: &str) {
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", title.cyan().bold());
    println!("{}", "─".repeat(60).dimmed());
}

/// Helper to convert "~" to the actual home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if !path.starts_with('~') {
        return PathBuf::from(path);
    }

    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home;
    }

    // Handle common forms: "~/..." and "~\\...".
    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        return home.join(rest);
    }

    PathBuf::from(path)
}

// Formats to YYYY-MM-DD only
pub fn format_date_short(value: Option<std::time::SystemTime>) -> String {
    match value {
        Some(t) => {
            let dt = DateTime::<Utc>::from(t);
            dt.format("%Y-%m-%d").to_string()
        }
        None => "-".to_string(),
    }
}

/// Single yes/no question on an explicitly passed input handle. Blocks until
/// a line (or EOF) arrives; only a case-insensitive "y" counts as yes.
pub fn prompt_yes_no(question: &str, input: &mut dyn BufRead) -> bool {
    print!("{question} (y/n): ");
    use std::io::Write;
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return false;
    }
    line.trim().eq_ignore_ascii_case("y")
}

/// Fixed step-by-step guidance covering the four recovery paths. Pure output.
pub fn print_instructions(window_days: i64) {
    print_section("ROLLBACK INSTRUCTIONS");
    println!(
        "
METHOD 1: Using Windows Settings (if within {window_days} days)
-----------------------------------------------------
1. Press Windows Key + I to open Settings
2. Go to: System -> Recovery
3. Look for \"Go back\" under Recovery options
4. Click \"Go back\" if available
5. Follow the on-screen wizard
6. Your PC will restart and roll back to the previous version

METHOD 2: Using this tool
-------------------------
Answer the prompt below (or run `winback open`) and the Recovery
settings page is opened for you.

METHOD 3: Advanced startup (if Settings doesn't work)
-----------------------------------------------------
1. Press Windows Key + I -> System -> Recovery
2. Click \"Restart now\" next to Advanced startup
3. Choose: Troubleshoot -> Advanced options -> Go back to previous version

METHOD 4: Clean installation (after {window_days} days)
---------------------------------------------
If rollback is not available you'll need to:
1. Download the Windows 10 ISO from Microsoft
2. Create installation media
3. Back up your data
4. Perform a clean installation
"
    );
}

/// Shown instead of the prompt when no backup directory was found.
pub fn print_recommendation() {
    print_section("RECOMMENDATION");
    println!("Since rollback is not available, consider:");
    println!("1. Visit: https://www.microsoft.com/software-download/windows10");
    println!("2. Download the Windows 10 installation media");
    println!("3. Back up all important data");
    println!("4. Perform a clean installation");
}

/// Manual fallback steps, printed when the prompt is declined or the
/// settings launcher fails.
pub fn print_manual_access() {
    println!();
    println!("You can open Recovery settings manually at any time:");
    println!("  Press Windows Key + I -> System -> Recovery");
}

pub fn print_completion_banner() {
    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!("{} Check complete. Good luck!", "✓".green().bold());
    println!("{}", "─".repeat(60).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn lowercase_y_is_yes() {
        let mut input = Cursor::new(b"y\n".to_vec());
        assert!(prompt_yes_no("Open?", &mut input));
    }

    #[test]
    fn uppercase_y_is_yes() {
        let mut input = Cursor::new(b"Y\n".to_vec());
        assert!(prompt_yes_no("Open?", &mut input));
    }

    #[test]
    fn anything_else_is_no() {
        for answer in ["n\n", "no\n", "yes\n", "maybe\n", "\n", ""] {
            let mut input = Cursor::new(answer.as_bytes().to_vec());
            assert!(
                !prompt_yes_no("Open?", &mut input),
                "expected {answer:?} to read as no"
            );
        }
    }
}
