//! Geocoding error types

use thiserror::Error;

/// Remote statuses that usually clear up on their own
const TRANSIENT_STATUSES: [&str; 2] = ["OVER_QUERY_LIMIT", "UNKNOWN_ERROR"];

/// Errors that can occur during a geocoding call
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Missing or malformed input, detected before any network access
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP exchange itself failed or returned an unreadable body
    #[error("Geocoding request failed: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a status other than `OK`
    #[error(
        "Geocoding failed: {}. Server returned status code {status}.",
        .error_message.as_deref().unwrap_or("no error message")
    )]
    Remote {
        /// Status code returned by the service (e.g. `ZERO_RESULTS`)
        status: String,
        /// Human-readable message returned alongside the status
        error_message: Option<String>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Failures below the geocoding protocol: connection, timeout, unreadable body
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Non-success HTTP status without a parseable geocoding body
    #[error("HTTP {status}: {body_preview}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Leading part of the response body
        body_preview: String,
    },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GeocodingError {
    /// Returns true if repeating the same call may succeed
    ///
    /// Advisory only: the client never retries on its own.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(TransportError::Parse(_)) => false,
            Self::Transport(TransportError::HttpStatus { status, .. }) => {
                *status == 429 || *status >= 500
            },
            Self::Transport(_) => true,
            Self::Remote { status, .. } => TRANSIENT_STATUSES.contains(&status.as_str()),
            Self::InvalidArgument(_) | Self::Configuration(_) => false,
        }
    }

    /// Remote status code, if the service answered with one
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::Remote { status, .. } => Some(status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        let connection = TransportError::ConnectionFailed("test".to_string());
        assert!(GeocodingError::from(connection).is_retryable());
        assert!(GeocodingError::from(TransportError::Timeout { timeout_secs: 10 }).is_retryable());
        assert!(
            GeocodingError::from(TransportError::HttpStatus {
                status: 503,
                body_preview: String::new(),
            })
            .is_retryable()
        );
        assert!(
            GeocodingError::Remote {
                status: "OVER_QUERY_LIMIT".to_string(),
                error_message: None,
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!GeocodingError::InvalidArgument("test".to_string()).is_retryable());
        assert!(!GeocodingError::Configuration("test".to_string()).is_retryable());
        assert!(!GeocodingError::from(TransportError::Parse("test".to_string())).is_retryable());
        assert!(
            !GeocodingError::from(TransportError::HttpStatus {
                status: 404,
                body_preview: String::new(),
            })
            .is_retryable()
        );
        assert!(
            !GeocodingError::Remote {
                status: "REQUEST_DENIED".to_string(),
                error_message: Some("The provided API key is invalid.".to_string()),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_remote_error_display() {
        let err = GeocodingError::Remote {
            status: "ZERO_RESULTS".to_string(),
            error_message: Some("no match".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("ZERO_RESULTS"));
        assert!(msg.contains("no match"));
        assert_eq!(err.status(), Some("ZERO_RESULTS"));

        let err = GeocodingError::Remote {
            status: "INVALID_REQUEST".to_string(),
            error_message: None,
        };
        assert!(err.to_string().contains("INVALID_REQUEST"));
    }

    #[test]
    fn test_transport_error_display() {
        let err = GeocodingError::from(TransportError::Timeout { timeout_secs: 10 });
        assert!(err.to_string().contains("10"));
        assert!(err.status().is_none());

        let err = GeocodingError::from(TransportError::HttpStatus {
            status: 502,
            body_preview: "Bad Gateway".to_string(),
        });
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("Bad Gateway"));
    }
}
