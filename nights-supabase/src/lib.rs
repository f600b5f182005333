pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::SupabaseClient;
pub use credentials::{
    CredentialField, CredentialSource, CredentialSources, Credentials, DEFAULT_TABLE, config_path,
    credential_sources,
};
pub use error::SupabaseError;
pub use types::ListingRow;
