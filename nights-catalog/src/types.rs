//! Data model types for cinema listings.
//!
//! A [`MovieListing`] is the persisted record being reconciled; a
//! [`CinemaSnapshot`] is the operator-curated list of titles one cinema chain
//! currently shows. [`ListingUpdate`] is the partial write produced by
//! reconciliation and consumed by a persistence gateway.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::title::slugify;

// ── Cinema ──────────────────────────────────────────────────────────────────

/// Identifier of a cinema chain (e.g., "vox", "cineco", "cinepolis").
///
/// Always stored in slug form, so `"VOX"` and `" vox "` name the same chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CinemaId(String);

/// A cinema id that slugifies to nothing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid cinema id: {0:?}")]
pub struct InvalidCinemaId(pub String);

impl CinemaId {
    /// Build a cinema id from raw text, slugifying it.
    pub fn new(raw: &str) -> Result<Self, InvalidCinemaId> {
        let slug = slugify(raw);
        if slug.is_empty() {
            return Err(InvalidCinemaId(raw.to_string()));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CinemaId {
    type Error = InvalidCinemaId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CinemaId> for String {
    fn from(id: CinemaId) -> Self {
        id.0
    }
}

impl std::str::FromStr for CinemaId {
    type Err = InvalidCinemaId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CinemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Titles one cinema chain currently lists as showing, copied by hand from
/// the chain's website. Often contains several spellings of the same film.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaSnapshot {
    pub cinema: CinemaId,
    #[serde(default)]
    pub titles: Vec<String>,
}

// ── Movie listing ───────────────────────────────────────────────────────────

/// A persisted movie listing, the subject of reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieListing {
    /// Primary key in the backing store.
    pub id: String,
    /// Display title as scraped from the primary source.
    pub title: String,
    pub is_now_showing: bool,
    pub is_coming_soon: bool,
    /// Cinema chains currently listing this title. Ordered, no duplicates.
    #[serde(rename = "scraped_from", default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl MovieListing {
    /// Whether `cinema` is already recorded as a source.
    pub fn has_source(&self, cinema: &CinemaId) -> bool {
        self.sources.iter().any(|s| s == cinema.as_str())
    }

    /// Both or neither status flag set. Tolerated, never corrected.
    pub fn has_ambiguous_status(&self) -> bool {
        self.is_now_showing == self.is_coming_soon
    }
}

/// A partial listing update carrying only the fields that changed.
///
/// Serializes to the column names of the listings table, omitting unchanged
/// fields, so it can be sent directly as a PATCH body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingUpdate {
    #[serde(rename = "scraped_from", skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_now_showing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_coming_soon: Option<bool>,
}

impl ListingUpdate {
    /// True when nothing changed and no write should be issued.
    pub fn is_empty(&self) -> bool {
        self.sources.is_none() && self.is_now_showing.is_none() && self.is_coming_soon.is_none()
    }

    /// True when this update moves a listing from coming-soon to now-showing.
    pub fn promotes(&self) -> bool {
        self.is_now_showing == Some(true) && self.is_coming_soon == Some(false)
    }

    /// Apply the changed fields to an in-memory listing.
    pub fn apply_to(&self, listing: &mut MovieListing) {
        if let Some(ref sources) = self.sources {
            listing.sources = sources.clone();
        }
        if let Some(now) = self.is_now_showing {
            listing.is_now_showing = now;
        }
        if let Some(soon) = self.is_coming_soon {
            listing.is_coming_soon = soon;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> MovieListing {
        MovieListing {
            id: "1".to_string(),
            title: "Anaconda".to_string(),
            is_now_showing: false,
            is_coming_soon: true,
            sources: vec!["vox".to_string()],
            updated_at: None,
        }
    }

    #[test]
    fn cinema_id_is_slugified() {
        let id = CinemaId::new(" VOX Cinemas ").unwrap();
        assert_eq!(id.as_str(), "vox-cinemas");
        assert!(CinemaId::new("!!").is_err());
    }

    #[test]
    fn has_source_compares_slug() {
        let l = listing();
        assert!(l.has_source(&CinemaId::new("Vox").unwrap()));
        assert!(!l.has_source(&CinemaId::new("cineco").unwrap()));
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let update = ListingUpdate::default();
        assert!(update.is_empty());
        assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn update_serializes_only_changed_columns() {
        let update = ListingUpdate {
            sources: Some(vec!["vox".to_string(), "cineco".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "scraped_from": ["vox", "cineco"] })
        );
    }

    #[test]
    fn apply_promotion() {
        let mut l = listing();
        let update = ListingUpdate {
            sources: None,
            is_now_showing: Some(true),
            is_coming_soon: Some(false),
        };
        assert!(update.promotes());
        update.apply_to(&mut l);
        assert!(l.is_now_showing);
        assert!(!l.is_coming_soon);
        assert_eq!(l.sources, vec!["vox"]);
    }

    #[test]
    fn ambiguous_status_detected() {
        let mut l = listing();
        assert!(!l.has_ambiguous_status());
        l.is_now_showing = true;
        assert!(l.has_ambiguous_status());
    }
}
