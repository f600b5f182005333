use std::path::PathBuf;

use crate::error::SupabaseError;

/// Table holding movie listings when none is configured.
pub const DEFAULT_TABLE: &str = "movies";

const ENV_URL: &str = "SUPABASE_URL";
const ENV_SERVICE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
const ENV_TABLE: &str = "SUPABASE_TABLE";

/// Credentials for the managed datastore's REST endpoint.
#[derive(Clone)]
pub struct Credentials {
    /// Project URL, e.g. `https://abcd.supabase.co`.
    pub url: String,
    pub service_key: String,
    pub table: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("service_key", &"****")
            .field("table", &self.table)
            .finish()
    }
}

/// Where a credential field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Hard-coded default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// One credential field as resolved on its own, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialField {
    /// `None` exactly when `source` is [`CredentialSource::Missing`].
    pub value: Option<String>,
    pub source: CredentialSource,
}

/// Value and provenance of each credential field.
#[derive(Debug)]
pub struct CredentialSources {
    pub url: CredentialField,
    pub service_key: CredentialField,
    pub table: CredentialField,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub(crate) struct ConfigFile {
    pub(crate) supabase: Option<SupabaseConfig>,
}

#[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
pub(crate) struct SupabaseConfig {
    pub(crate) url: Option<String>,
    pub(crate) service_role_key: Option<String>,
    pub(crate) table: Option<String>,
}

impl Credentials {
    /// Load credentials from environment variables or the config file.
    ///
    /// Priority: env vars > config file.
    /// Required: url, service key. Optional: table (defaults to `movies`).
    pub fn load() -> Result<Self, SupabaseError> {
        Self::resolve(|var| std::env::var(var).ok(), load_config_file())
    }

    /// Resolve credentials from an environment lookup and parsed config.
    pub(crate) fn resolve(
        env: impl Fn(&str) -> Option<String>,
        config: Option<SupabaseConfig>,
    ) -> Result<Self, SupabaseError> {
        let non_empty = |v: String| (!v.trim().is_empty()).then_some(v);

        let url = env(ENV_URL)
            .and_then(non_empty)
            .or_else(|| config.as_ref().and_then(|c| c.url.clone()))
            .ok_or_else(|| {
                SupabaseError::config(format!(
                    "Missing url. Set {ENV_URL} env var or add to config file"
                ))
            })?;

        let service_key = env(ENV_SERVICE_KEY)
            .and_then(non_empty)
            .or_else(|| config.as_ref().and_then(|c| c.service_role_key.clone()))
            .ok_or_else(|| {
                SupabaseError::config(format!(
                    "Missing service_role_key. Set {ENV_SERVICE_KEY} env var or add to config file"
                ))
            })?;

        let table = env(ENV_TABLE)
            .and_then(non_empty)
            .or_else(|| config.as_ref().and_then(|c| c.table.clone()))
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            service_key,
            table,
        })
    }
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bahrain-nights").join("credentials.toml"))
}

/// Resolve each credential field independently and report its source.
///
/// Unlike [`Credentials::load`], a missing field does not hide the others.
pub fn credential_sources() -> CredentialSources {
    sources_from(|var| std::env::var(var).ok(), load_config_file())
}

pub(crate) fn sources_from(
    env: impl Fn(&str) -> Option<String>,
    config: Option<SupabaseConfig>,
) -> CredentialSources {
    let pick = |var: &'static str, in_config: Option<String>, fallback: Option<&str>| {
        if let Some(v) = env(var).filter(|v| !v.trim().is_empty()) {
            CredentialField {
                value: Some(v),
                source: CredentialSource::EnvVar(var),
            }
        } else if let Some(v) = in_config {
            CredentialField {
                value: Some(v),
                source: CredentialSource::ConfigFile,
            }
        } else if let Some(v) = fallback {
            CredentialField {
                value: Some(v.to_string()),
                source: CredentialSource::Default,
            }
        } else {
            CredentialField {
                value: None,
                source: CredentialSource::Missing,
            }
        }
    };

    let config = config.unwrap_or_default();
    let mut url = pick(ENV_URL, config.url, None);
    url.value = url.value.map(|u| u.trim_end_matches('/').to_string());

    CredentialSources {
        url,
        service_key: pick(ENV_SERVICE_KEY, config.service_role_key, None),
        table: pick(ENV_TABLE, config.table, Some(DEFAULT_TABLE)),
    }
}

fn load_config_file() -> Option<SupabaseConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    parse_config(&content)
}

pub(crate) fn parse_config(content: &str) -> Option<SupabaseConfig> {
    match toml::from_str::<ConfigFile>(content) {
        Ok(config) => config.supabase,
        Err(e) => {
            log::warn!("Ignoring unreadable credentials file: {}", e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/credentials_tests.rs"]
mod tests;
