//! Raw HTTP transport.
//!
//! The [`Transport`] trait is the network seam of the fetcher: it performs
//! one GET and reports the final status and body. Retries, timeouts and
//! status classification live in [`HttpFetcher`](crate::client::HttpFetcher).

use async_trait::async_trait;
use reqwest::{Client, redirect};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{FetchError, TransportError};

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 10;

// ============================================================================
// Transport Trait
// ============================================================================

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Final HTTP status after redirects.
    pub status: u16,
    /// Full body text.
    pub body: String,
}

impl RawResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses. Redirects are followed by the
    /// transport, so a final 3xx is a failure.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP GET.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and reads the whole body.
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// reqwest-backed transport with redirect following and an optional domain
/// allowlist.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
    allowed_domains: Option<Vec<String>>,
}

impl ReqwestTransport {
    /// Creates a transport sending `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            inner: client,
            allowed_domains: None,
        })
    }

    /// Restricts requests to the given domains and their subdomains.
    pub fn with_allowed_domains(mut self, domains: Vec<String>) -> Self {
        self.allowed_domains = Some(domains);
        self
    }

    fn check_url(&self, url: &str) -> Result<(), TransportError> {
        let parsed = Url::parse(url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        let Some(ref allowed) = self.allowed_domains else {
            return Ok(());
        };

        let host = parsed
            .host_str()
            .ok_or_else(|| TransportError::InvalidUrl("No host in URL".to_string()))?;

        let allowed = allowed
            .iter()
            .any(|domain| host == domain || host.ends_with(&format!(".{domain}")));

        if allowed {
            Ok(())
        } else {
            Err(TransportError::DomainNotAllowed(host.to_string()))
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self), fields(url = %url))]
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.check_url(url)?;
        debug!("GET request");

        let response = self.inner.get(url).send().await?;
        let status = response.status().as_u16();
        debug!(status, "Response received");

        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new("vlr-test").unwrap()
    }

    #[test]
    fn test_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(!RawResponse::new(304, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn test_domain_allowlist() {
        let transport = transport().with_allowed_domains(vec!["vlr.gg".to_string()]);

        assert!(transport.check_url("https://www.vlr.gg/team/2").is_ok());
        assert!(transport.check_url("https://vlr.gg/matches").is_ok());
        assert!(matches!(
            transport.check_url("https://evil.com/vlr.gg"),
            Err(TransportError::DomainNotAllowed(_))
        ));
    }

    #[test]
    fn test_no_domain_restrictions() {
        assert!(transport().check_url("https://any.domain.com").is_ok());
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            transport().check_url("not-a-valid-url"),
            Err(TransportError::InvalidUrl(_))
        ));
    }
}
