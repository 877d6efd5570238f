//! Provider abstraction and catalog.
//!
//! - [`ShortenProvider`] - Uniform adapter interface
//! - [`ProviderCatalog`] - Id to adapter mapping used by the shorten service
//! - [`provider_order`] - Fallback ordering policy

pub mod catalog;
pub mod shorten_provider;

pub use catalog::{
    FALLBACK_ORDER, ProviderCatalog, ProviderEntry, ProviderInfo, SELECTABLE_PROVIDERS,
    provider_order,
};
pub use shorten_provider::ShortenProvider;

#[cfg(test)]
pub use shorten_provider::MockShortenProvider;
