use std::sync::Arc;

use crate::application::services::{ShortenService, UnshortenService};
use crate::config::Config;
use crate::domain::errors::RequestError;
use crate::infrastructure::http::RequestClient;
use crate::infrastructure::providers::standard_catalog;
use crate::infrastructure::resolver::ResolverApi;

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub unshorten_service: Arc<UnshortenService>,
}

impl AppState {
    pub fn new(shorten_service: Arc<ShortenService>, unshorten_service: Arc<UnshortenService>) -> Self {
        Self {
            shorten_service,
            unshorten_service,
        }
    }

    /// Wires the standard provider catalog and resolver from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidRequest`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, RequestError> {
        let client = RequestClient::new(config.http_settings())?;

        let catalog = standard_catalog(&client, &config.provider_endpoints());
        let shorten_service = ShortenService::new(catalog, config.demo_domain.clone());

        let resolver = ResolverApi::new(client.clone(), config.unshorten_api_url.clone());
        let unshorten_service = UnshortenService::new(client, resolver);

        Ok(Self::new(
            Arc::new(shorten_service),
            Arc::new(unshorten_service),
        ))
    }
}
