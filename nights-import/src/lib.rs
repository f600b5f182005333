//! Reconcile per-cinema snapshots into persisted movie listings.
//!
//! This crate owns the matching and merge logic: resolving whether a cinema
//! lists a movie, computing the minimal listing update, and driving a
//! sequential pass over every listing through a [`ListingStore`].

pub mod driver;
pub mod progress;
pub mod reconcile;
pub mod resolve;
pub mod store;

pub use driver::{
    CinemaStats, DriverOptions, Pass, ReconcileError, RunReport, WriteFailure, run_cleanup, run_pass,
    run_reconciliation,
};
pub use progress::{LogProgress, ReconcileProgress, SilentProgress};
pub use reconcile::{Reconciliation, prune_listing, reconcile_listing};
pub use resolve::is_listed;
pub use store::{ListingStore, StoreError};
