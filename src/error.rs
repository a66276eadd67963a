//! Error types for rs-lede.
//!
//! Errors only surface at the collaborator seams (fetching, rendering) and
//! when building options. The extraction entry points absorb them and
//! return plain strings or `None` entries instead.

/// Error type for collaborator and configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching a document failed (network, protocol, status or size limit).
    #[error("Fetch failed for {url}: {reason}")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// Human-readable failure reason.
        reason: String,
    },

    /// The markup-to-text renderer could not handle a fragment.
    #[error("Rendering failed: {0}")]
    Render(String),

    /// A collaborator could not be built from its configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A strip pattern did not compile.
    #[error("Invalid strip pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn fetch(url: &str, reason: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for rs-lede operations.
pub type Result<T> = std::result::Result<T, Error>;
