//! Error types for Sveve client operations.
//!
//! Every client in this crate reports failures through [`SveveError`]. The
//! variants keep the underlying cause apart so callers can tell a dead network
//! link from a provider rejection, while [`SveveError::message`] gives the same
//! human-readable text regardless of cause.

use std::io;
use thiserror::Error;

/// Trait for errors that can be classified as retryable or permanent.
///
/// The clients in this crate never retry on their own. This classification
/// exists so callers can plug the errors into whatever retry policy they use.
///
/// # Examples
///
/// ```rust
/// use sveve::{ProviderError, RetryableError, SveveError};
///
/// let err = SveveError::from(ProviderError::fatal("Feil brukernavn/passord"));
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error represents a transient failure
    /// that might succeed if the same call is made again.
    fn is_retryable(&self) -> bool;
}

/// The outbound call itself failed or did not return a success status.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The configured endpoint cannot carry path segments.
    #[error("Invalid Sveve endpoint: {endpoint}")]
    InvalidEndpoint { endpoint: String },

    /// Error encoding the request query string.
    #[error("Error building Sveve request URL: {0}")]
    BuildRequestUrl(#[source] serde_urlencoded::ser::Error),

    /// Failed to send HTTP request.
    #[error("Failed to send HTTP request: {0}")]
    HttpRequest(#[from] reqwest_middleware::Error),

    /// Non-successful HTTP status code returned by the server.
    #[error("Unexpected HTTP status {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Failed to read the response body.
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Failed to write to the console output stream.
    #[error("Failed to write console output: {0}")]
    Output(#[source] io::Error),
}

/// The call went through but the provider's payload signals failure.
///
/// The `Display` output of the first two variants is the provider's text
/// verbatim, so it can be shown to users as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider rejected the whole request (bad credentials, empty account...).
    #[error("{message}")]
    Fatal { message: String },

    /// The balance endpoint answered with text that is not a number.
    #[error("{body}")]
    InvalidBalance { body: String },

    /// The response matches none of the documented shapes.
    #[error("Sveve response does not match documented data structure: {raw}")]
    UnexpectedResponse { raw: String },
}

impl ProviderError {
    /// Create a [`ProviderError::Fatal`] from the provider's message.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }
}

/// A client was driven in a way it was not set up for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A mock operation was called without a configured outcome.
    #[error("{operation} was called but the mock client has no result configured for it")]
    Unconfigured { operation: &'static str },
}

/// Main error type for all Sveve client operations.
#[derive(Debug, Error)]
pub enum SveveError {
    /// The request could not be delivered or answered.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The provider answered with a failure.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The client was used without the setup the call needs.
    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl SveveError {
    /// Human-readable message, independent of the underlying cause.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The provider error, if the provider reported the failure.
    pub fn as_provider(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for SveveError {
    fn from(error: reqwest_middleware::Error) -> Self {
        Self::Transport(TransportError::HttpRequest(error))
    }
}

pub type Result<T> = std::result::Result<T, SveveError>;

impl RetryableError for TransportError {
    fn is_retryable(&self) -> bool {
        match self {
            TransportError::HttpRequest(_) | TransportError::ReadBody(_) => true,
            TransportError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            TransportError::BuildHttpClient(_)
            | TransportError::InvalidEndpoint { .. }
            | TransportError::BuildRequestUrl(_)
            | TransportError::Output(_) => false,
        }
    }
}

impl RetryableError for SveveError {
    fn is_retryable(&self) -> bool {
        match self {
            SveveError::Transport(error) => error.is_retryable(),
            // Provider verdicts and harness misuse do not change on a second try
            SveveError::Provider(_) | SveveError::Usage(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_error_displays_provider_text() {
        let err = SveveError::from(ProviderError::fatal("Feil brukernavn/passord"));
        assert_eq!(err.to_string(), "Feil brukernavn/passord");
        assert_eq!(err.message(), "Feil brukernavn/passord");
    }

    #[test]
    fn test_unexpected_response_echoes_payload() {
        let err = SveveError::from(ProviderError::UnexpectedResponse {
            raw: r#"{"response": ["some weird response"]}"#.to_string(),
        });
        assert_eq!(
            err.message(),
            r#"Sveve response does not match documented data structure: {"response": ["some weird response"]}"#
        );
    }

    #[test]
    fn test_usage_error_names_operation() {
        let err = SveveError::from(UsageError::Unconfigured {
            operation: "remaining_sms",
        });
        assert!(err.message().starts_with("remaining_sms was called"));
        assert!(err.as_provider().is_none());
    }

    #[test]
    fn test_retryable_classification() {
        let server_error = SveveError::from(TransportError::HttpStatus {
            status: 503,
            body: None,
        });
        assert!(server_error.is_retryable());

        let client_error = SveveError::from(TransportError::HttpStatus {
            status: 404,
            body: Some("not found".to_string()),
        });
        assert!(!client_error.is_retryable());

        assert!(!SveveError::from(ProviderError::fatal("nope")).is_retryable());
        assert!(
            !SveveError::from(UsageError::Unconfigured {
                operation: "send_sms"
            })
            .is_retryable()
        );
    }
}
