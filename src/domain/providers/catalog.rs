//! Registry of known providers and the fallback ordering policy.

use super::ShortenProvider;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Providers tried after the caller's preference, most reliable first.
pub const FALLBACK_ORDER: [&str; 6] = ["is.gd", "v.gd", "tinyurl", "t.ly", "cleanuri", "shortlink"];

/// Services offered to clients for selection.
pub const SELECTABLE_PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo::new("is.gd", "is.gd", true, "Lightning fast & reliable"),
    ProviderInfo::new("tinyurl", "TinyURL", true, "Classic & trusted"),
    ProviderInfo::new("bit.ly", "Bit.ly", false, "Professional features"),
    ProviderInfo::new("rebrand.ly", "Rebrand.ly", false, "Custom branding"),
    ProviderInfo::new("cutt.ly", "Cutt.ly", false, "Analytics included"),
    ProviderInfo::new("click.ly", "click.ly", false, "Simple & clean"),
    ProviderInfo::new("tiny.cc", "tiny.cc", false, "Lightweight option"),
    ProviderInfo::new("shorter.me", "shorter.me", false, "Modern interface"),
    ProviderInfo::new("shorter.gg", "shorter.gg", false, "Gaming focused"),
    ProviderInfo::new("spoo.me", "spoo.me", false, "Privacy focused"),
];

/// Static description of a selectable service.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub recommended: bool,
    pub description: &'static str,
}

impl ProviderInfo {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        recommended: bool,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            recommended,
            description,
        }
    }
}

/// Builds the ordered, de-duplicated list of provider ids to try.
///
/// The requested id is lower-cased and placed first, followed by
/// [`FALLBACK_ORDER`]. Only the first occurrence of each id is kept.
pub fn provider_order(requested: &str) -> Vec<String> {
    let mut order: Vec<String> = Vec::with_capacity(FALLBACK_ORDER.len() + 1);

    let candidates = std::iter::once(requested.to_lowercase())
        .chain(FALLBACK_ORDER.iter().map(|id| id.to_string()));

    for id in candidates {
        if !order.contains(&id) {
            order.push(id);
        }
    }

    order
}

/// An adapter together with the name reported when it succeeds.
#[derive(Clone)]
pub struct ProviderEntry {
    pub display_name: String,
    pub provider: Arc<dyn ShortenProvider>,
}

/// Maps lower-case provider ids to adapters.
///
/// Several ids may share one adapter (brand aliases); each keeps its own
/// display name so the response shows which substitution happened.
#[derive(Clone, Default)]
pub struct ProviderCatalog {
    entries: HashMap<String, ProviderEntry>,
}

impl ProviderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` under `id`, replacing any previous entry.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        display_name: impl Into<String>,
        provider: Arc<dyn ShortenProvider>,
    ) -> &mut Self {
        self.entries.insert(
            id.into().to_lowercase(),
            ProviderEntry {
                display_name: display_name.into(),
                provider,
            },
        );
        self
    }

    pub fn get(&self, id: &str) -> Option<&ProviderEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::MockShortenProvider;

    #[test]
    fn test_order_starts_with_requested() {
        let order = provider_order("Bit.ly");
        assert_eq!(
            order,
            vec!["bit.ly", "is.gd", "v.gd", "tinyurl", "t.ly", "cleanuri", "shortlink"]
        );
    }

    #[test]
    fn test_order_removes_duplicate_of_requested() {
        let order = provider_order("TinyURL");
        assert_eq!(
            order,
            vec!["tinyurl", "is.gd", "v.gd", "t.ly", "cleanuri", "shortlink"]
        );
    }

    #[test]
    fn test_order_has_no_duplicates_for_any_fixed_entry() {
        for id in FALLBACK_ORDER {
            let order = provider_order(id);
            assert_eq!(order.len(), FALLBACK_ORDER.len());
            assert_eq!(order[0], id);

            let mut deduped = order.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), order.len());
        }
    }

    #[test]
    fn test_catalog_lookup_is_lowercase() {
        let mut catalog = ProviderCatalog::new();
        catalog.register("IS.GD", "is.gd", Arc::new(MockShortenProvider::new()));

        assert!(catalog.contains("is.gd"));
        assert_eq!(catalog.get("is.gd").unwrap().display_name, "is.gd");
        assert!(catalog.get("v.gd").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_selectable_providers_have_unique_ids() {
        let mut ids: Vec<_> = SELECTABLE_PROVIDERS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SELECTABLE_PROVIDERS.len());
    }
}
