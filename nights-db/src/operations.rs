//! Write operations on movie listings.

use nights_catalog::{ListingUpdate, MovieListing};
use rusqlite::{Connection, ToSql, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Malformed scraped_from for listing '{id}': {source}")]
    Sources {
        id: String,
        source: serde_json::Error,
    },
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

/// Insert or replace a listing. Used to seed a local store.
pub fn upsert_listing(conn: &Connection, listing: &MovieListing) -> Result<(), OperationError> {
    let sources = encode_sources(&listing.id, &listing.sources)?;
    conn.execute(
        "INSERT INTO movies (id, title, is_now_showing, is_coming_soon, scraped_from)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             title = excluded.title,
             is_now_showing = excluded.is_now_showing,
             is_coming_soon = excluded.is_coming_soon,
             scraped_from = excluded.scraped_from,
             updated_at = datetime('now')",
        params![
            listing.id,
            listing.title,
            listing.is_now_showing,
            listing.is_coming_soon,
            sources,
        ],
    )?;
    Ok(())
}

/// Apply a partial update to one listing by primary key.
///
/// Only the fields present in `update` are written; `updated_at` is always
/// stamped. An empty update is a no-op and touches nothing.
pub fn update_listing(
    conn: &Connection,
    id: &str,
    update: &ListingUpdate,
) -> Result<(), OperationError> {
    if update.is_empty() {
        return Ok(());
    }

    let mut assignments: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(ref sources) = update.sources {
        assignments.push("scraped_from = ?");
        values.push(Box::new(encode_sources(id, sources)?));
    }
    if let Some(now) = update.is_now_showing {
        assignments.push("is_now_showing = ?");
        values.push(Box::new(now));
    }
    if let Some(soon) = update.is_coming_soon {
        assignments.push("is_coming_soon = ?");
        values.push(Box::new(soon));
    }
    assignments.push("updated_at = datetime('now')");
    values.push(Box::new(id.to_string()));

    let sql = format!("UPDATE movies SET {} WHERE id = ?", assignments.join(", "));
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let changed = conn.execute(&sql, params.as_slice())?;

    if changed == 0 {
        return Err(OperationError::NotFound {
            entity_type: "movie".to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}

fn encode_sources(id: &str, sources: &[String]) -> Result<String, OperationError> {
    serde_json::to_string(sources).map_err(|e| OperationError::Sources {
        id: id.to_string(),
        source: e,
    })
}

pub(crate) fn decode_sources(id: &str, raw: &str) -> Result<Vec<String>, OperationError> {
    serde_json::from_str(raw).map_err(|e| OperationError::Sources {
        id: id.to_string(),
        source: e,
    })
}
