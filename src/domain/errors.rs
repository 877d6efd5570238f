//! Failure types for upstream calls.
//!
//! None of these reach the client directly: provider failures advance the
//! fallback chain, and resolution failures trigger demo mode.

/// Network-level failure of the shared request helper.
///
/// HTTP error statuses are not represented here; they come back as ordinary
/// responses for the caller to interpret.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("max retries exceeded after {attempts} attempt(s): {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },

    #[error("request could not be built: {0}")]
    InvalidRequest(String),
}

/// A single provider failed to produce a short URL.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider} API error: {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{provider} error: {message}")]
    Upstream {
        provider: &'static str,
        message: String,
    },

    #[error("Invalid {provider} response: {body}")]
    InvalidResponse { provider: &'static str, body: String },

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl ProviderError {
    pub fn status(provider: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Status {
            provider,
            status: status.as_u16(),
        }
    }

    pub fn upstream(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider,
            message: message.into(),
        }
    }

    pub fn invalid_response(provider: &'static str, body: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider,
            body: body.into(),
        }
    }
}

/// Every resolution method failed for a short URL.
#[derive(Debug, thiserror::Error)]
pub enum UnshortenError {
    #[error("Could not unshorten URL")]
    Unresolved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_messages() {
        let err = ProviderError::status("is.gd", reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "is.gd API error: 502");

        let err = ProviderError::upstream("v.gd", "Please specify a URL to shorten.");
        assert_eq!(err.to_string(), "v.gd error: Please specify a URL to shorten.");

        let err = ProviderError::invalid_response("CleanURI", "{}");
        assert_eq!(err.to_string(), "Invalid CleanURI response: {}");
    }

    #[test]
    fn test_request_error_converts_into_provider_error() {
        let err: ProviderError = RequestError::MaxRetriesExceeded {
            attempts: 2,
            last_error: "connection refused".to_string(),
        }
        .into();

        assert!(matches!(err, ProviderError::Request(_)));
        assert!(err.to_string().contains("2 attempt(s)"));
    }
}
