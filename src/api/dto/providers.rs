//! DTOs for the provider listing endpoint.

use crate::domain::providers::ProviderInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderInfo>,
}
