//! Persistence gateways the driver reads from and writes to.

use nights_catalog::{ListingUpdate, MovieListing};
use nights_db::OperationError;
use nights_supabase::{SupabaseClient, SupabaseError};
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("Supabase error: {0}")]
    Supabase(#[from] SupabaseError),
    #[error("{0}")]
    Other(String),
}

impl StoreError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// A datastore holding movie listings.
///
/// Reads are a full scan; writes update one listing by primary key. No
/// transaction spans more than one write.
pub trait ListingStore {
    /// Fetch every listing. Order is stable within one call.
    fn fetch_listings(&mut self) -> Result<Vec<MovieListing>, StoreError>;

    /// Write the changed fields of one listing.
    fn update_listing(&mut self, id: &str, update: &ListingUpdate) -> Result<(), StoreError>;
}

impl ListingStore for Connection {
    fn fetch_listings(&mut self) -> Result<Vec<MovieListing>, StoreError> {
        Ok(nights_db::list_listings(self)?)
    }

    fn update_listing(&mut self, id: &str, update: &ListingUpdate) -> Result<(), StoreError> {
        Ok(nights_db::update_listing(self, id, update)?)
    }
}

impl ListingStore for SupabaseClient {
    fn fetch_listings(&mut self) -> Result<Vec<MovieListing>, StoreError> {
        Ok(SupabaseClient::fetch_listings(self)?)
    }

    fn update_listing(&mut self, id: &str, update: &ListingUpdate) -> Result<(), StoreError> {
        Ok(SupabaseClient::update_listing(self, id, update)?)
    }
}
