use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nights_catalog::load_snapshots;

use super::{heading, report_dropped};
use crate::error::CliError;
use crate::settings::resolve_snapshot_dir;

/// Run the `snapshots` command.
pub(crate) fn run_snapshots(dir: Option<PathBuf>) -> Result<(), CliError> {
    let dir = resolve_snapshot_dir(dir);
    let loaded = load_snapshots(&dir).map_err(|e| CliError::config(e.to_string()))?;

    heading("Cinema snapshots");
    log::info!(
        "  Directory: {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan())
    );
    log::info!("");

    if loaded.snapshots.is_empty() {
        log::warn!("No snapshots found in {}", dir.display());
        return Ok(());
    }

    for snapshot in &loaded.snapshots {
        log::info!(
            "  {} {:>4} titles",
            format!("{:<12}", snapshot.cinema.as_str()).if_supports_color(Stdout, |t| t.bold()),
            snapshot.titles.len()
        );
        for title in &snapshot.titles {
            log::debug!("    {}", title);
        }
    }
    report_dropped(&loaded);
    Ok(())
}
