use thiserror::Error;

pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Failures of the ICICIDirect sync pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Credentials are incomplete or the HTTP client could not be built.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Failed to fetch SIP book: {0}")]
    FetchFailed(String),

    /// A single remote record could not be stored. Never escapes reconciliation.
    #[error("Failed to sync SIP {external_id}: {message}")]
    Record {
        external_id: String,
        message: String,
    },

    #[error("{0}")]
    SyncFailed(String),
}
