//! Shared HTTP helper with per-attempt timeout and fixed-delay retry.

use crate::domain::errors::RequestError;
use reqwest::{Client, RequestBuilder, Response, redirect::Policy};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio_retry::{Retry, strategy::FixedInterval};

/// User agent sent to every upstream. Several shorteners reject requests
/// without a browser-like agent.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Timeout and retry policy for upstream calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Upper bound for a single attempt.
    pub timeout: Duration,
    /// Additional attempts after the first one fails at the network level.
    pub retries: u32,
    /// Fixed pause between attempts.
    pub retry_delay: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
            retries: 1,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// Thin wrapper over two `reqwest` clients.
///
/// The default client follows redirects; [`RequestClient::no_redirect`] returns
/// one that hands 3xx responses back untouched, which the unshortener needs to
/// read `Location` headers. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct RequestClient {
    following: Client,
    manual: Client,
    settings: HttpSettings,
}

impl RequestClient {
    /// Builds both underlying clients.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidRequest`] if the TLS backend cannot be
    /// initialized.
    pub fn new(settings: HttpSettings) -> Result<Self, RequestError> {
        let following = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| RequestError::InvalidRequest(e.to_string()))?;

        let manual = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .redirect(Policy::none())
            .build()
            .map_err(|e| RequestError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            following,
            manual,
            settings,
        })
    }

    /// Client that follows redirects.
    pub fn client(&self) -> &Client {
        &self.following
    }

    /// Client that never follows redirects.
    pub fn no_redirect(&self) -> &Client {
        &self.manual
    }

    /// Sends `request` using the configured retry count.
    ///
    /// See [`Self::send_with_retries`].
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, RequestError> {
        self.send_with_retries(request, self.settings.retries).await
    }

    /// Sends `request`, retrying network-level failures.
    ///
    /// Each attempt is cancelled after [`HttpSettings::timeout`]. Connection
    /// errors and timeouts are retried up to `retries` more times with a fixed
    /// [`HttpSettings::retry_delay`] in between. Any HTTP response, including
    /// 4xx and 5xx, is returned as-is on the first attempt that receives it.
    ///
    /// # Errors
    ///
    /// - [`RequestError::InvalidRequest`] if the request body cannot be replayed
    /// - [`RequestError::MaxRetriesExceeded`] once every attempt has failed
    pub async fn send_with_retries(
        &self,
        request: RequestBuilder,
        retries: u32,
    ) -> Result<Response, RequestError> {
        if request.try_clone().is_none() {
            return Err(RequestError::InvalidRequest(
                "request body cannot be replayed".to_string(),
            ));
        }

        let timeout = self.settings.timeout;
        let attempts = AtomicU32::new(0);
        let strategy = FixedInterval::new(self.settings.retry_delay).take(retries as usize);

        let result = Retry::start(strategy, || {
            let attempt = attempts.fetch_add(1, Ordering::Relaxed) + 1;
            let request = request.try_clone();

            async move {
                let request = request.ok_or_else(|| "request body cannot be replayed".to_string())?;

                match tokio::time::timeout(timeout, request.send()).await {
                    Ok(Ok(response)) => Ok(response),
                    Ok(Err(e)) => {
                        tracing::warn!(attempt, error = %e, "Upstream request attempt failed");
                        Err(e.to_string())
                    }
                    Err(_) => {
                        tracing::warn!(
                            attempt,
                            timeout_ms = timeout.as_millis() as u64,
                            "Upstream request attempt timed out"
                        );
                        Err(format!("timed out after {}ms", timeout.as_millis()))
                    }
                }
            }
        })
        .await;

        result.map_err(|last_error| RequestError::MaxRetriesExceeded {
            attempts: attempts.load(Ordering::Relaxed),
            last_error,
        })
    }
}
