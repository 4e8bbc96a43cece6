//! Error types for manifest resolution

use thiserror::Error;

/// Result type for manifest resolution
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Errors that can occur while resolving a manifest
#[derive(Error, Debug)]
pub enum Error {
    /// Web source answered with a failure status or never answered
    #[error("Unable to fetch {url}: {message}")]
    SourceUnreachable {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// Standard input has no further documents
    #[error("No more documents on standard input")]
    StreamExhausted,

    /// URL matches no supported source kind
    #[error("Invalid manifest URL: {0}")]
    InvalidSource(String),

    /// Fetched bytes are not a well-formed JSON document
    #[error("Malformed manifest document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Object storage fetch failed
    #[error("Object storage fetch failed for {bucket}/{key} ({region}): {message}")]
    StorageFetch {
        region: String,
        bucket: String,
        key: String,
        message: String,
    },
}

impl Error {
    /// Create an unreachable-source error for a failure HTTP status.
    pub fn http_status<S: Into<String>>(url: S, status: u16) -> Self {
        Error::SourceUnreachable {
            url: url.into(),
            status: Some(status),
            message: format!("HTTP status {}", status),
        }
    }

    /// Create an unreachable-source error for a transport-level failure.
    pub fn transport<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Error::SourceUnreachable {
            url: url.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Whether resolution may degrade this failure to an absent manifest.
    ///
    /// Recoverable failures mean the manifest simply is not there (source
    /// unreachable, stdin exhausted, URL unusable); the resolver reports
    /// them and carries on. Anything else means data arrived and is broken,
    /// which stops resolution.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::SourceUnreachable { .. } | Error::StreamExhausted | Error::InvalidSource(_)
        )
    }
}
