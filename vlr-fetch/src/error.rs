//! Fetch and retrieval error types.

use std::time::Duration;

use thiserror::Error;
use vlr_core::ExtractionError;

// ============================================================================
// Fetch Error
// ============================================================================

/// Error type for fetching a single URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The attempt did not complete within the configured timeout.
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Per-attempt timeout.
        timeout: Duration,
    },

    /// 429 or a 5xx response.
    #[error("Transient HTTP {status} from {url}")]
    TransientHttp {
        /// Requested URL.
        url: String,
        /// Response status.
        status: u16,
    },

    /// Any other non-success response.
    #[error("HTTP {status} from {url}")]
    PermanentHttp {
        /// Requested URL.
        url: String,
        /// Response status.
        status: u16,
    },

    /// The request failed before a status was received.
    #[error("Network error for {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying error message.
        message: String,
    },

    /// The URL could not be parsed or is not allowed.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl {
        /// Offending URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Every attempt failed with a retryable error.
    #[error("Request to {url} failed after {attempts} attempts: {source}")]
    Exhausted {
        /// Requested URL.
        url: String,
        /// Status of the last response, if one was received.
        status: Option<u16>,
        /// Number of attempts made.
        attempts: u32,
        /// Error of the last attempt.
        #[source]
        source: Box<FetchError>,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl FetchError {
    /// Returns true if another attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::TransientHttp { .. } | Self::Network { .. }
        )
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TransientHttp { status, .. } | Self::PermanentHttp { status, .. } => {
                Some(*status)
            }
            Self::Exhausted { status, .. } => *status,
            _ => None,
        }
    }

    /// URL the error refers to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Timeout { url, .. }
            | Self::TransientHttp { url, .. }
            | Self::PermanentHttp { url, .. }
            | Self::Network { url, .. }
            | Self::InvalidUrl { url, .. }
            | Self::Exhausted { url, .. } => Some(url),
            Self::Client(_) => None,
        }
    }
}

// ============================================================================
// Transport Error
// ============================================================================

/// Error raised by a [`Transport`](crate::transport::Transport) before any
/// status was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request error from reqwest.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// URL rejected before sending.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Domain not on the allowlist.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

// ============================================================================
// Scrape Error
// ============================================================================

/// Error returned by a retrieval: fetching, extraction or pagination.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page was fetched but could not be interpreted.
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// The source still reported a next page after `limit` pages.
    #[error("Pagination for {url} exceeded {limit} pages")]
    PageLimitExceeded {
        /// URL of the first page.
        url: String,
        /// Page ceiling.
        limit: u32,
    },
}

impl ScrapeError {
    /// Returns the fetch error, if this is one.
    pub fn as_fetch(&self) -> Option<&FetchError> {
        match self {
            Self::Fetch(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let timeout = FetchError::Timeout {
            url: "u".into(),
            timeout: Duration::from_millis(10),
        };
        let transient = FetchError::TransientHttp {
            url: "u".into(),
            status: 503,
        };
        let permanent = FetchError::PermanentHttp {
            url: "u".into(),
            status: 404,
        };
        let network = FetchError::Network {
            url: "u".into(),
            message: "reset".into(),
        };

        assert!(timeout.is_retryable());
        assert!(transient.is_retryable());
        assert!(network.is_retryable());
        assert!(!permanent.is_retryable());
    }

    #[test]
    fn test_exhausted_carries_status_and_url() {
        let err = FetchError::Exhausted {
            url: "https://www.vlr.gg/team/2".into(),
            status: Some(500),
            attempts: 3,
            source: Box::new(FetchError::TransientHttp {
                url: "https://www.vlr.gg/team/2".into(),
                status: 500,
            }),
        };

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.url(), Some("https://www.vlr.gg/team/2"));
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("3 attempts"));
    }

    #[test]
    fn test_scrape_error_from_extraction() {
        let err: ScrapeError = ExtractionError::missing(".team-header").into();
        assert!(matches!(err, ScrapeError::Extraction(_)));
        assert!(err.as_fetch().is_none());
    }
}
