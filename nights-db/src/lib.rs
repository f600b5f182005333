//! SQLite persistence layer for movie listings.
//!
//! A local stand-in for the managed datastore: same table shape, same read
//! and per-row update contract. Backed by rusqlite with the bundled feature.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{OperationError, update_listing, upsert_listing};
pub use queries::{get_listing, list_listings};
pub use rusqlite::Connection;
pub use schema::{SchemaError, open_database, open_memory};
