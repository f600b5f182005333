//! Application settings (`~/.config/bahrain-nights/settings.toml`).
//!
//! ```toml
//! [listings]
//! snapshot_dir = "/srv/bahrain-nights/snapshots"
//! ```

use std::path::PathBuf;

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bahrain-nights").join("settings.toml")
}

/// Resolve the snapshot directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `listings.snapshot_dir` in `settings.toml`
/// 3. `./snapshots`
pub(crate) fn resolve_snapshot_dir(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    let saved = std::fs::read_to_string(settings_path())
        .ok()
        .and_then(|contents| snapshot_dir_from(&contents));
    saved.unwrap_or_else(|| PathBuf::from("snapshots"))
}

/// Read `listings.snapshot_dir` from settings text, if set.
fn snapshot_dir_from(contents: &str) -> Option<PathBuf> {
    let doc: toml::Value = contents.parse().ok()?;
    let dir = doc.get("listings")?.get("snapshot_dir")?.as_str()?;
    if dir.is_empty() {
        None
    } else {
        Some(PathBuf::from(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_override_wins() {
        let p = resolve_snapshot_dir(Some(PathBuf::from("/tmp/snaps")));
        assert_eq!(p, PathBuf::from("/tmp/snaps"));
    }

    #[test]
    fn reads_snapshot_dir_from_settings() {
        let contents = "[listings]\nsnapshot_dir = \"/srv/snapshots\"\n";
        assert_eq!(snapshot_dir_from(contents), Some(PathBuf::from("/srv/snapshots")));
    }

    #[test]
    fn empty_or_missing_setting_is_none() {
        assert_eq!(snapshot_dir_from("[listings]\nsnapshot_dir = \"\"\n"), None);
        assert_eq!(snapshot_dir_from("[other]\nkey = 1\n"), None);
        assert_eq!(snapshot_dir_from("not toml = ="), None);
    }
}
