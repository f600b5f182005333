//! YAML loading for operator-curated cinema snapshots.
//!
//! Each `.yaml`/`.yml` file in the snapshot directory holds one
//! [`CinemaSnapshot`]:
//!
//! ```text
//! cinema: vox
//! titles:
//!   - "Tala2ni"
//!   - "Talaani"
//! ```

use std::path::Path;

use thiserror::Error;

use crate::title::normalize_title;
use crate::types::{CinemaId, CinemaSnapshot, MovieListing};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
    #[error("Cinema '{cinema}' is defined twice ({first} and {second})")]
    DuplicateCinema {
        cinema: CinemaId,
        first: String,
        second: String,
    },
}

/// A snapshot title dropped because it normalizes to nothing.
///
/// Such a title would be a substring of every listing title and match all of
/// them, so it never reaches the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedTitle {
    pub cinema: CinemaId,
    pub title: String,
}

/// Snapshots loaded from a directory, in file-name order.
#[derive(Debug, Default)]
pub struct LoadedSnapshots {
    pub snapshots: Vec<CinemaSnapshot>,
    pub dropped: Vec<DroppedTitle>,
}

impl LoadedSnapshots {
    /// Look up the snapshot for a cinema.
    pub fn get(&self, cinema: &CinemaId) -> Option<&CinemaSnapshot> {
        self.snapshots.iter().find(|s| &s.cinema == cinema)
    }
}

/// Load a YAML sequence of listings, e.g. to seed a local store.
pub fn load_listings_file(path: &Path) -> Result<Vec<MovieListing>, SnapshotError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load a single snapshot file.
pub fn load_snapshot_file(path: &Path) -> Result<CinemaSnapshot, SnapshotError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load every snapshot in a directory.
///
/// A missing directory yields no snapshots. Titles that normalize to the
/// empty string are removed and reported in [`LoadedSnapshots::dropped`].
pub fn load_snapshots(dir: &Path) -> Result<LoadedSnapshots, SnapshotError> {
    if !dir.exists() {
        return Ok(LoadedSnapshots::default());
    }
    if !dir.is_dir() {
        return Err(SnapshotError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| SnapshotError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut loaded = LoadedSnapshots::default();
    let mut origins: Vec<String> = Vec::new();

    for entry in entries {
        let path = entry.path();
        let mut snapshot = load_snapshot_file(&path)?;

        if let Some(pos) = loaded
            .snapshots
            .iter()
            .position(|s| s.cinema == snapshot.cinema)
        {
            return Err(SnapshotError::DuplicateCinema {
                cinema: snapshot.cinema,
                first: origins[pos].clone(),
                second: path.display().to_string(),
            });
        }

        let cinema = snapshot.cinema.clone();
        snapshot.titles.retain(|title| {
            let keep = !normalize_title(title).is_empty();
            if !keep {
                loaded.dropped.push(DroppedTitle {
                    cinema: cinema.clone(),
                    title: title.clone(),
                });
            }
            keep
        });

        origins.push(path.display().to_string());
        loaded.snapshots.push(snapshot);
    }

    Ok(loaded)
}
