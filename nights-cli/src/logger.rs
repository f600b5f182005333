//! Console logger backing the `log` facade.
//!
//! Info lines go to stdout as-is so command output reads like plain text.
//! Warnings and errors go to stderr with a colored prefix. `--verbose` adds
//! debug lines from this workspace's crates with timestamps; `--logfile`
//! mirrors everything to a file with ANSI codes stripped.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use crate::error::CliError;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    file: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record<'_>) -> String {
        let message = record.args().to_string();
        let line = match record.level() {
            Level::Error => format!(
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                message
            ),
            Level::Warn => format!(
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
                message
            ),
            Level::Info => message,
            Level::Debug | Level::Trace => format!(
                "{}",
                message.if_supports_color(Stdout, |t| t.dimmed())
            ),
        };

        if self.timestamps {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            format!("{} {}", now.if_supports_color(Stdout, |t| t.dimmed()), line)
        } else {
            line
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Keep HTTP stack chatter out of debug output.
        metadata.level() <= Level::Info || metadata.target().starts_with("nights_")
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }

        if let Some(ref file) = self.file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(ref file) = self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Pick the log level for the global flags. Quiet wins over verbose.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the logger. Must be called once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let file = match logfile {
        Some(path) => Some(Mutex::new(File::create(path)?)),
        None => None,
    };

    let level = level_for(quiet, verbose);
    let logger = CliLogger {
        level,
        timestamps: verbose && !quiet,
        file,
    };

    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| CliError::other(format!("Failed to install logger: {e}")))?;
    log::set_max_level(level);
    Ok(())
}
