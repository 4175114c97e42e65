use thiserror::Error;

/// Failure modes of a single registry lookup.
///
/// Every variant is recoverable at the presentation boundary; the caller
/// renders a category-specific message and waits for the next submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The registry has no record for this CNPJ (HTTP 404).
    #[error("CNPJ not found in the registry.")]
    NotFound,

    /// The registry is throttling us (HTTP 429). Rendered as a warning,
    /// not an error: waiting and resubmitting is expected to succeed.
    #[error("Too many requests in a short time. Wait a few seconds and try again.")]
    RateLimited,

    /// Any other non-success status from the registry.
    #[error("Registry error (status {0}).")]
    Http(u16),

    /// The request never produced a usable response: connection refused,
    /// timeout, DNS failure, or a body that did not decode.
    #[error("Could not reach the registry: {0}")]
    Transport(String),
}

impl LookupError {
    /// Maps an HTTP status code to its outcome category.
    ///
    /// Returns `None` for 200, the only status carrying a decodable record.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => None,
            404 => Some(Self::NotFound),
            429 => Some(Self::RateLimited),
            other => Some(Self::Http(other)),
        }
    }
}
