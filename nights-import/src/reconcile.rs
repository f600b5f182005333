//! Listing state transitions for one cinema observation.
//!
//! Reconciliation only ever adds sources and promotes coming-soon titles to
//! now-showing. Removing stale sources is a separate pass ([`prune_listing`])
//! that never touches the status flags.

use nights_catalog::{CinemaId, ListingUpdate, MovieListing};

/// Outcome of reconciling or pruning one listing against one cinema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub sources_changed: bool,
    /// Only the fields that changed; empty means no write is needed.
    pub update: ListingUpdate,
}

impl Reconciliation {
    /// Whether a write should be issued.
    pub fn needs_write(&self) -> bool {
        self.sources_changed || !self.update.is_empty()
    }
}

/// Merge a match result for `cinema` into `listing`.
///
/// When matched, the cinema is appended to the sources if missing, and a
/// listing that is coming soon but not yet showing is promoted to
/// now-showing. Listings already showing are never demoted, and listings with
/// both flags set are left alone.
pub fn reconcile_listing(
    listing: &MovieListing,
    cinema: &CinemaId,
    is_matched: bool,
) -> Reconciliation {
    if !is_matched {
        return Reconciliation::default();
    }

    let mut result = Reconciliation::default();

    if !listing.has_source(cinema) {
        let mut sources = listing.sources.clone();
        sources.push(cinema.as_str().to_string());
        result.update.sources = Some(sources);
        result.sources_changed = true;
    }

    if !listing.is_now_showing && listing.is_coming_soon {
        result.update.is_now_showing = Some(true);
        result.update.is_coming_soon = Some(false);
    }

    result
}

/// Drop `cinema` from the sources of a listing it no longer shows.
///
/// Remaining sources keep their order. Status flags are untouched.
pub fn prune_listing(listing: &MovieListing, cinema: &CinemaId, is_matched: bool) -> Reconciliation {
    if is_matched || !listing.has_source(cinema) {
        return Reconciliation::default();
    }

    let sources: Vec<String> = listing
        .sources
        .iter()
        .filter(|s| s.as_str() != cinema.as_str())
        .cloned()
        .collect();

    Reconciliation {
        sources_changed: true,
        update: ListingUpdate {
            sources: Some(sources),
            ..Default::default()
        },
    }
}
