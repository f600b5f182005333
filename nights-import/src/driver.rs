//! Sequential reconciliation of every listing against each cinema snapshot.
//!
//! One pass reads all listings once, then for each cinema walks the listings
//! in store order: normalize, resolve, reconcile, and write only when
//! something changed. A failed write is logged and counted, and the pass
//! moves on; the next run picks it up again. Reruns against the same
//! snapshots converge to no writes.

use nights_catalog::{CinemaId, CinemaSnapshot, MovieListing, normalize_title};
use thiserror::Error;

use crate::progress::ReconcileProgress;
use crate::reconcile::{Reconciliation, prune_listing, reconcile_listing};
use crate::resolve::is_listed;
use crate::store::{ListingStore, StoreError};

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Failed to read listings: {0}")]
    Read(#[source] StoreError),
}

/// Which transition a pass applies to matched/unmatched listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Add sources and promote coming-soon listings.
    Reconcile,
    /// Remove sources a cinema no longer lists.
    Prune,
}

impl Pass {
    fn apply(self, listing: &MovieListing, cinema: &CinemaId, is_matched: bool) -> Reconciliation {
        match self {
            Pass::Reconcile => reconcile_listing(listing, cinema, is_matched),
            Pass::Prune => prune_listing(listing, cinema, is_matched),
        }
    }
}

/// Options controlling a pass.
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    /// Report without writing.
    pub dry_run: bool,
}

/// Counters for one cinema's scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CinemaStats {
    pub cinema: CinemaId,
    pub checked: usize,
    pub matched: usize,
    pub updated: usize,
    pub promoted: usize,
    pub sources_added: usize,
    pub sources_removed: usize,
    pub failed: usize,
}

impl CinemaStats {
    fn new(cinema: CinemaId) -> Self {
        Self {
            cinema,
            checked: 0,
            matched: 0,
            updated: 0,
            promoted: 0,
            sources_added: 0,
            sources_removed: 0,
            failed: 0,
        }
    }
}

/// A write the store rejected.
#[derive(Debug)]
pub struct WriteFailure {
    pub cinema: CinemaId,
    pub listing_id: String,
    pub title: String,
    pub error: StoreError,
}

/// Result of a full pass.
#[derive(Debug)]
pub struct RunReport {
    pub pass: Pass,
    pub dry_run: bool,
    /// Listings read from the store.
    pub listings: usize,
    /// Listings with both or neither status flag set at read time.
    pub ambiguous_status: usize,
    /// Listings with no comparable title, left out of every cinema's scan.
    pub skipped: usize,
    pub cinemas: Vec<CinemaStats>,
    pub failures: Vec<WriteFailure>,
}

impl RunReport {
    fn sum(&self, f: impl Fn(&CinemaStats) -> usize) -> usize {
        self.cinemas.iter().map(f).sum()
    }

    pub fn total_checked(&self) -> usize {
        self.sum(|c| c.checked)
    }

    pub fn total_updated(&self) -> usize {
        self.sum(|c| c.updated)
    }

    pub fn total_promoted(&self) -> usize {
        self.sum(|c| c.promoted)
    }

    pub fn total_sources_added(&self) -> usize {
        self.sum(|c| c.sources_added)
    }

    pub fn total_sources_removed(&self) -> usize {
        self.sum(|c| c.sources_removed)
    }

    pub fn total_failed(&self) -> usize {
        self.sum(|c| c.failed)
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped
    }
}

/// Reconcile every listing against each snapshot, adding sources and
/// promoting coming-soon titles.
pub fn run_reconciliation<S, P>(
    store: &mut S,
    snapshots: &[CinemaSnapshot],
    options: &DriverOptions,
    progress: &P,
) -> Result<RunReport, ReconcileError>
where
    S: ListingStore + ?Sized,
    P: ReconcileProgress + ?Sized,
{
    run_pass(store, snapshots, options, progress, Pass::Reconcile)
}

/// Remove each snapshot's cinema from listings it no longer shows.
pub fn run_cleanup<S, P>(
    store: &mut S,
    snapshots: &[CinemaSnapshot],
    options: &DriverOptions,
    progress: &P,
) -> Result<RunReport, ReconcileError>
where
    S: ListingStore + ?Sized,
    P: ReconcileProgress + ?Sized,
{
    run_pass(store, snapshots, options, progress, Pass::Prune)
}

/// Run one pass over all listings for each snapshot in order.
///
/// Only a failed read aborts. Applied updates are folded into the in-memory
/// listings so later cinemas see earlier cinemas' changes.
pub fn run_pass<S, P>(
    store: &mut S,
    snapshots: &[CinemaSnapshot],
    options: &DriverOptions,
    progress: &P,
    pass: Pass,
) -> Result<RunReport, ReconcileError>
where
    S: ListingStore + ?Sized,
    P: ReconcileProgress + ?Sized,
{
    let mut listings = store.fetch_listings().map_err(ReconcileError::Read)?;

    // Titles never change during a pass, so each is normalized once.
    let normalized: Vec<Option<String>> = listings
        .iter()
        .map(|listing| {
            let title = normalize_title(&listing.title);
            if title.is_empty() {
                log::warn!(
                    "Skipping listing {} with no comparable title ({:?})",
                    listing.id,
                    listing.title
                );
                None
            } else {
                Some(title)
            }
        })
        .collect();

    let mut report = RunReport {
        pass,
        dry_run: options.dry_run,
        listings: listings.len(),
        ambiguous_status: listings.iter().filter(|l| l.has_ambiguous_status()).count(),
        skipped: normalized.iter().filter(|t| t.is_none()).count(),
        cinemas: Vec::with_capacity(snapshots.len()),
        failures: Vec::new(),
    };

    for snapshot in snapshots {
        let cinema = &snapshot.cinema;
        let mut stats = CinemaStats::new(cinema.clone());
        progress.on_cinema(cinema, snapshot.titles.len(), listings.len());

        for (listing, title) in listings.iter_mut().zip(&normalized) {
            let Some(title) = title else {
                continue;
            };
            stats.checked += 1;

            let is_matched = is_listed(title, &snapshot.titles);
            if is_matched {
                stats.matched += 1;
            }

            let outcome = pass.apply(listing, cinema, is_matched);
            if !outcome.needs_write() {
                continue;
            }

            if !options.dry_run {
                if let Err(e) = store.update_listing(&listing.id, &outcome.update) {
                    log::warn!(
                        "Failed to update \"{}\" ({}) for {}: {}",
                        listing.title,
                        listing.id,
                        cinema,
                        e
                    );
                    stats.failed += 1;
                    report.failures.push(WriteFailure {
                        cinema: cinema.clone(),
                        listing_id: listing.id.clone(),
                        title: listing.title.clone(),
                        error: e,
                    });
                    continue;
                }
            }

            stats.updated += 1;
            if outcome.update.promotes() {
                stats.promoted += 1;
            }
            if outcome.sources_changed {
                match pass {
                    Pass::Reconcile => stats.sources_added += 1,
                    Pass::Prune => stats.sources_removed += 1,
                }
            }

            progress.on_update(listing, cinema, &outcome.update);
            outcome.update.apply_to(listing);
        }

        progress.on_cinema_complete(&stats);
        report.cinemas.push(stats);
    }

    Ok(report)
}
