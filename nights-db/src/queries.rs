//! Read queries over movie listings.

use nights_catalog::MovieListing;
use rusqlite::{Connection, OptionalExtension, params};

use crate::operations::{OperationError, decode_sources};

/// Row as stored, before `scraped_from` is decoded.
struct RawListing {
    id: String,
    title: String,
    is_now_showing: bool,
    is_coming_soon: bool,
    scraped_from: String,
    updated_at: String,
}

impl RawListing {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            is_now_showing: row.get(2)?,
            is_coming_soon: row.get(3)?,
            scraped_from: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    fn decode(self) -> Result<MovieListing, OperationError> {
        let sources = decode_sources(&self.id, &self.scraped_from)?;
        Ok(MovieListing {
            id: self.id,
            title: self.title,
            is_now_showing: self.is_now_showing,
            is_coming_soon: self.is_coming_soon,
            sources,
            updated_at: Some(self.updated_at),
        })
    }
}

const SELECT_LISTING: &str =
    "SELECT id, title, is_now_showing, is_coming_soon, scraped_from, updated_at FROM movies";

/// Fetch every listing, in insertion order.
pub fn list_listings(conn: &Connection) -> Result<Vec<MovieListing>, OperationError> {
    let mut stmt = conn.prepare(&format!("{SELECT_LISTING} ORDER BY rowid"))?;
    let rows = stmt
        .query_map([], RawListing::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter().map(RawListing::decode).collect()
}

/// Fetch one listing by id.
pub fn get_listing(conn: &Connection, id: &str) -> Result<Option<MovieListing>, OperationError> {
    let raw = conn
        .query_row(
            &format!("{SELECT_LISTING} WHERE id = ?1"),
            params![id],
            RawListing::from_row,
        )
        .optional()?;
    raw.map(RawListing::decode).transpose()
}
