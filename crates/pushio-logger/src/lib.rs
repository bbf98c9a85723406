//! Console and log-file output for the pushio tools
//!
//! One process-wide logger: warnings and errors always reach the console,
//! quieter levels appear as verbosity is raised, and everything is appended
//! to a per-run log file under the user's config directory. A spinner wraps
//! long packaging steps when the console is not in verbose mode.

use chrono::Local;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

struct LogState {
    verbosity: u8,
    log_file: Option<PathBuf>,
    spinner: Option<ProgressBar>,
}

static STATE: Mutex<LogState> = Mutex::new(LogState {
    verbosity: 0,
    log_file: None,
    spinner: None,
});

/// Set up the logger.
///
/// `verbosity` controls the console: 0 shows warnings and user-facing
/// output only, 1 adds debug lines (-v), 2 adds step traces (-vv). The log
/// file is truncated each run so it always reflects the latest invocation.
pub fn init_with_verbosity(verbosity: u8) -> Result<(), String> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("could not create {}: {}", dir.display(), e))?;

    let path = dir.join("pushio.log");
    File::create(&path).map_err(|e| format!("could not open {}: {}", path.display(), e))?;

    if let Ok(mut state) = STATE.lock() {
        state.verbosity = verbosity;
        state.log_file = Some(path);
    }
    Ok(())
}

/// Console verbosity picked at startup; 0 before `init_with_verbosity` runs
pub fn get_verbosity() -> u8 {
    STATE.lock().map(|state| state.verbosity).unwrap_or(0)
}

fn config_dir() -> Result<PathBuf, String> {
    let base = if cfg!(target_os = "windows") {
        dirs::config_dir()
    } else {
        dirs::home_dir().map(|home| home.join(".config"))
    };
    base.map(|dir| dir.join("pushio"))
        .ok_or_else(|| "could not determine the user config directory".to_string())
}

/// Append one line to the log file, tagged and timestamped
fn record(tag: &str, message: &str) {
    let Ok(state) = STATE.lock() else {
        return;
    };
    let Some(path) = &state.log_file else {
        return;
    };
    if let Ok(mut file) = OpenOptions::new().append(true).open(path) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {:<5} {}", timestamp, tag, message);
    }
}

/// A warning; always shown on the console
pub fn warn(message: &str) {
    record("WARN", message);
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// An error; always shown on the console
pub fn error(message: &str) {
    record("ERROR", message);
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Plain informational output; shown on the console at -v and up
pub fn info(message: &str) {
    record("INFO", message);
    if get_verbosity() >= 1 {
        eprintln!("{}", message);
    }
}

/// Debug detail; shown on the console at -v and up
pub fn debug(message: &str) {
    record("DEBUG", message);
    if get_verbosity() >= 1 {
        eprintln!("{} {}", "debug:".blue().bold(), message);
    }
}

/// A step of a longer run; shown on the console only at -vv
pub fn step(message: &str) {
    record("STEP", message);
    if get_verbosity() >= 2 {
        eprintln!("{} {}", "step:".cyan(), message);
    }
}

/// Start a spinner for a long-running step.
///
/// Skipped in verbose mode, where the spinner and the log lines would fight
/// over the terminal.
pub fn spinner_start(message: &str) {
    if get_verbosity() > 0 {
        return;
    }

    let spinner = ProgressBar::new_spinner().with_message(message.to_string());
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(80));

    if let Ok(mut state) = STATE.lock() {
        state.spinner = Some(spinner);
    }
}

fn spinner_take() -> Option<ProgressBar> {
    STATE.lock().ok().and_then(|mut state| state.spinner.take())
}

/// Clear the spinner and print a success line
pub fn spinner_success(message: &str) {
    if let Some(spinner) = spinner_take() {
        spinner.finish_and_clear();
    }
    record("DONE", message);
    eprintln!("{} {}", "\u{2714}".green().bold(), message);
}

/// Clear the spinner and print a failure line
pub fn spinner_error(message: &str) {
    if let Some(spinner) = spinner_take() {
        spinner.finish_and_clear();
    }
    record("FAIL", message);
    eprintln!("{} {}", "\u{2717}".red().bold(), message);
}

/// Clear the spinner without printing anything
pub fn spinner_stop() {
    if let Some(spinner) = spinner_take() {
        spinner.finish_and_clear();
    }
}
