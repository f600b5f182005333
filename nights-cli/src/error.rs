use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error (credentials, snapshots, settings)
    #[error("Config error: {0}")]
    Config(String),

    /// Managed datastore setup failed (credentials, client)
    #[error("{0}")]
    Supabase(#[from] nights_supabase::SupabaseError),

    /// Reading listings failed
    #[error("{0}")]
    Read(#[from] nights_import::ReconcileError),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supabase_errors_are_not_double_prefixed() {
        let err = CliError::from(nights_supabase::SupabaseError::config("Missing url"));
        assert_eq!(err.to_string(), "Configuration error: Missing url");
    }
}
