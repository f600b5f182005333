//! Cinema listing data model, title normalization, and snapshot YAML loading.
//!
//! This crate defines the movie listing records and per-cinema snapshots
//! without any datastore dependencies. Persistence lives in `nights-db` and
//! `nights-supabase`; matching and reconciliation live in `nights-import`.

pub mod title;
pub mod types;
pub mod yaml;

pub use title::{normalize_title, slugify};
pub use types::*;
pub use yaml::{
    DroppedTitle, LoadedSnapshots, SnapshotError, load_listings_file, load_snapshot_file,
    load_snapshots,
};
