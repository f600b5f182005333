//! Wire types for the listings table's REST representation.

use nights_catalog::{ListingUpdate, MovieListing};
use serde::{Deserialize, Serialize};

/// Primary keys may be integers or uuids depending on the table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One row as returned by the REST endpoint. Every column but `id` is
/// nullable in the hosted schema.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRow {
    pub id: RowId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_now_showing: Option<bool>,
    #[serde(default)]
    pub is_coming_soon: Option<bool>,
    #[serde(default)]
    pub scraped_from: Option<Vec<String>>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<ListingRow> for MovieListing {
    fn from(row: ListingRow) -> Self {
        MovieListing {
            id: row.id.to_string(),
            title: row.title.unwrap_or_default(),
            is_now_showing: row.is_now_showing.unwrap_or(false),
            is_coming_soon: row.is_coming_soon.unwrap_or(false),
            sources: row.scraped_from.unwrap_or_default(),
            updated_at: row.updated_at,
        }
    }
}

/// PATCH body: the changed columns plus a fresh `updated_at`.
#[derive(Debug, Serialize)]
pub struct PatchBody<'a> {
    #[serde(flatten)]
    pub update: &'a ListingUpdate,
    pub updated_at: String,
}

/// Columns requested on every read.
pub const SELECT_COLUMNS: &str = "id,title,is_now_showing,is_coming_soon,scraped_from,updated_at";
