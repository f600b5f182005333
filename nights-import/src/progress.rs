//! Reconciliation progress reporting.

use nights_catalog::{CinemaId, ListingUpdate, MovieListing};

use crate::driver::CinemaStats;

/// Trait for receiving progress updates from a reconciliation pass.
pub trait ReconcileProgress {
    /// Called when a cinema's scan starts.
    fn on_cinema(&self, cinema: &CinemaId, titles: usize, listings: usize);

    /// Called after a write succeeds (or would be issued, in a dry run).
    fn on_update(&self, listing: &MovieListing, cinema: &CinemaId, update: &ListingUpdate);

    /// Called when a cinema's scan is complete.
    fn on_cinema_complete(&self, stats: &CinemaStats);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ReconcileProgress for SilentProgress {
    fn on_cinema(&self, _cinema: &CinemaId, _titles: usize, _listings: usize) {}
    fn on_update(&self, _listing: &MovieListing, _cinema: &CinemaId, _update: &ListingUpdate) {}
    fn on_cinema_complete(&self, _stats: &CinemaStats) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ReconcileProgress for LogProgress {
    fn on_cinema(&self, cinema: &CinemaId, titles: usize, listings: usize) {
        log::info!(
            "Checking {} listings against {} ({} titles)",
            listings,
            cinema,
            titles
        );
    }

    fn on_update(&self, listing: &MovieListing, _cinema: &CinemaId, update: &ListingUpdate) {
        let mut changes = Vec::new();
        if let Some(ref sources) = update.sources {
            changes.push(format!("sources [{}]", sources.join(", ")));
        }
        if update.promotes() {
            changes.push("coming soon -> now showing".to_string());
        }
        log::info!("  {}: {}", listing.title, changes.join(", "));
    }

    fn on_cinema_complete(&self, stats: &CinemaStats) {
        log::info!(
            "  {}: {} checked, {} updated, {} failed",
            stats.cinema,
            stats.checked,
            stats.updated,
            stats.failed
        );
    }
}
