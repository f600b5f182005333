pub(crate) mod config;
pub(crate) mod listings;
pub(crate) mod reconcile;
pub(crate) mod seed;
pub(crate) mod snapshots;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nights_catalog::{CinemaId, CinemaSnapshot, LoadedSnapshots, load_snapshots};
use nights_import::ListingStore;
use nights_supabase::{Credentials, SupabaseClient};

use crate::cli_types::StoreArgs;
use crate::error::CliError;

/// Open the listing store: a local SQLite file when `--db` is given,
/// otherwise the managed datastore using the configured credentials.
pub(crate) fn open_store(args: &StoreArgs) -> Result<Box<dyn ListingStore>, CliError> {
    if let Some(ref path) = args.db {
        if !path.exists() {
            return Err(CliError::config(format!(
                "No listings database found at {}. Run 'bahrain-nights seed' first.",
                path.display()
            )));
        }
        let conn = nights_db::open_database(path)
            .map_err(|e| CliError::database(format!("Failed to open {}: {e}", path.display())))?;
        log::debug!("Using local database {}", path.display());
        return Ok(Box::new(conn));
    }

    let creds = Credentials::load()?;
    log::debug!("Using {} table '{}'", creds.url, creds.table);
    let client = SupabaseClient::new(creds)?;
    Ok(Box::new(client))
}

/// Load snapshots from `dir`, warn about dropped titles, and keep only the
/// requested cinemas (in the order given on the command line).
pub(crate) fn select_snapshots(
    dir: &Path,
    cinemas: Option<&[CinemaId]>,
) -> Result<Vec<CinemaSnapshot>, CliError> {
    let loaded = load_snapshots(dir).map_err(|e| CliError::config(e.to_string()))?;
    report_dropped(&loaded);

    if loaded.snapshots.is_empty() {
        return Err(CliError::config(format!(
            "No cinema snapshots found in {}",
            dir.display()
        )));
    }

    let Some(cinemas) = cinemas else {
        return Ok(loaded.snapshots);
    };

    let mut selected = Vec::with_capacity(cinemas.len());
    for cinema in cinemas {
        let snapshot = loaded.get(cinema).ok_or_else(|| {
            CliError::config(format!(
                "No snapshot for cinema '{}' in {}",
                cinema,
                dir.display()
            ))
        })?;
        if !selected.iter().any(|s: &CinemaSnapshot| &s.cinema == cinema) {
            selected.push(snapshot.clone());
        }
    }
    Ok(selected)
}

pub(crate) fn report_dropped(loaded: &LoadedSnapshots) {
    for dropped in &loaded.dropped {
        log::warn!(
            "Ignoring {} title {:?}: nothing left after normalization",
            dropped.cinema,
            dropped.title
        );
    }
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

pub(crate) fn heading(text: &str) {
    log::info!("{}", text.if_supports_color(Stdout, |t| t.bold()));
}
