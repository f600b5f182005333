use std::path::Path;

use nights_catalog::load_listings_file;

use crate::error::CliError;

/// Run the `seed` command: upsert listings from YAML into a local database.
pub(crate) fn run_seed(db_path: &Path, file: &Path) -> Result<(), CliError> {
    let listings = load_listings_file(file).map_err(|e| CliError::config(e.to_string()))?;

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let conn = nights_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open {}: {e}", db_path.display())))?;

    for listing in &listings {
        nights_db::upsert_listing(&conn, listing)
            .map_err(|e| CliError::database(format!("Failed to write {}: {e}", listing.id)))?;
    }

    log::info!(
        "Seeded {} listings into {}",
        listings.len(),
        db_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_then_read_back() {
        let tmp = tempfile::TempDir::new().unwrap();
        let yaml = tmp.path().join("listings.yaml");
        std::fs::write(
            &yaml,
            "- id: \"1\"\n  title: Anaconda\n  is_now_showing: false\n  is_coming_soon: true\n",
        )
        .unwrap();
        let db = tmp.path().join("nested").join("listings.db");

        run_seed(&db, &yaml).unwrap();
        run_seed(&db, &yaml).unwrap();

        let conn = nights_db::open_database(&db).unwrap();
        let listings = nights_db::list_listings(&conn).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Anaconda");
    }

    #[test]
    fn unreadable_seed_file_is_a_config_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = run_seed(&tmp.path().join("x.db"), &tmp.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
