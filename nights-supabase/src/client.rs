use std::time::Duration;

use nights_catalog::{ListingUpdate, MovieListing};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::credentials::Credentials;
use crate::error::SupabaseError;
use crate::types::{ListingRow, PatchBody, SELECT_COLUMNS};

/// Rows fetched per request; matches the REST layer's default row cap.
pub const PAGE_SIZE: usize = 1000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the listings table of the managed datastore.
///
/// Every call waits for its response before returning; callers process one
/// record at a time.
pub struct SupabaseClient {
    http: Client,
    creds: Credentials,
}

impl SupabaseClient {
    /// Build a client with the auth headers preset.
    pub fn new(creds: Credentials) -> Result<Self, SupabaseError> {
        let key = HeaderValue::from_str(&creds.service_key)
            .map_err(|_| SupabaseError::config("Service key contains invalid header characters"))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", creds.service_key))
            .map_err(|_| SupabaseError::config("Service key contains invalid header characters"))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, creds })
    }

    /// Fetch every listing, paging through the table in id order.
    pub fn fetch_listings(&self) -> Result<Vec<MovieListing>, SupabaseError> {
        let mut listings = Vec::new();
        let mut offset = 0usize;

        loop {
            let resp = self
                .http
                .get(self.table_url())
                .query(&page_query(offset))
                .send()?;
            let text = check_status(resp)?.text()?;
            let rows: Vec<ListingRow> = serde_json::from_str(&text)?;
            let fetched = rows.len();
            log::debug!("Fetched {} listings at offset {}", fetched, offset);

            listings.extend(rows.into_iter().map(MovieListing::from));
            match next_offset(offset, fetched) {
                Some(next) => offset = next,
                None => break,
            }
        }

        Ok(listings)
    }

    /// Write the changed columns of one listing, stamping `updated_at`.
    pub fn update_listing(&self, id: &str, update: &ListingUpdate) -> Result<(), SupabaseError> {
        if update.is_empty() {
            return Ok(());
        }

        let body = PatchBody {
            update,
            updated_at: chrono::Utc::now().to_rfc3339(),
        };

        let resp = self
            .http
            .patch(self.table_url())
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&body)
            .send()?;
        let text = check_status(resp)?.text()?;
        patched_rows(id, &text)
    }

    fn table_url(&self) -> String {
        table_url(&self.creds)
    }
}

pub(crate) fn table_url(creds: &Credentials) -> String {
    format!("{}/rest/v1/{}", creds.url, creds.table)
}

pub(crate) fn page_query(offset: usize) -> Vec<(&'static str, String)> {
    vec![
        ("select", SELECT_COLUMNS.to_string()),
        ("order", "id.asc".to_string()),
        ("limit", PAGE_SIZE.to_string()),
        ("offset", offset.to_string()),
    ]
}

/// Offset of the page after one that returned `fetched` rows, or `None`
/// when that page was the last.
pub(crate) fn next_offset(offset: usize, fetched: usize) -> Option<usize> {
    (fetched >= PAGE_SIZE).then_some(offset + fetched)
}

/// Check a PATCH representation body. With `return=representation` an
/// unmatched filter comes back as `[]`.
pub(crate) fn patched_rows(id: &str, body: &str) -> Result<(), SupabaseError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body)?;
    if rows.is_empty() {
        return Err(SupabaseError::NotFound(id.to_string()));
    }
    Ok(())
}

fn check_status(resp: Response) -> Result<Response, SupabaseError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(error_for_status(status, body))
}

/// Map a non-success status and its body to an error.
pub(crate) fn error_for_status(status: StatusCode, body: String) -> SupabaseError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return SupabaseError::InvalidCredentials(format!("Service key rejected (HTTP {status})"));
    }
    SupabaseError::ServerError {
        status: status.as_u16(),
        message: body.chars().take(200).collect(),
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
