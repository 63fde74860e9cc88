//! HTTP transport
//!
//! The dispatcher only needs "GET this URL, give me status and body". That
//! capability sits behind [`HttpTransport`] so tests can swap in a mock.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;

use crate::config::GeocodingConfig;
use crate::error::{GeocodingError, TransportError};

/// Raw HTTP response handed back to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET request
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url` and return status and body
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a transport with the timeout and user agent from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_error(&self, e: &reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            TransportError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(&e))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_success_range() {
        let ok = HttpResponse {
            status: 200,
            body: String::new(),
        };
        assert!(ok.is_success());

        let not_found = HttpResponse {
            status: 404,
            body: String::new(),
        };
        assert!(!not_found.is_success());

        let redirect = HttpResponse {
            status: 302,
            body: String::new(),
        };
        assert!(!redirect.is_success());
    }

    #[test]
    fn test_reqwest_transport_builds() {
        let transport = ReqwestTransport::new(&GeocodingConfig::for_testing());
        assert!(transport.is_ok());
    }
}
