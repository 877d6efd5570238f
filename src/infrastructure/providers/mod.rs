//! Concrete adapters for the supported shortening services.
//!
//! [`standard_catalog`] wires them into a [`ProviderCatalog`], including the
//! brand aliases that have no API of their own and borrow is.gd or v.gd.

pub mod cleanuri;
pub mod endpoints;
pub mod fallback;
pub mod gd;
pub mod json_api;
pub mod tinyurl;

pub use cleanuri::CleanUriProvider;
pub use endpoints::ProviderEndpoints;
pub use fallback::WithFallback;
pub use gd::GdProvider;
pub use json_api::{ShortIoProvider, TlyProvider};
pub use tinyurl::TinyUrlProvider;

use crate::domain::providers::{ProviderCatalog, ShortenProvider};
use crate::infrastructure::http::RequestClient;
use std::sync::Arc;

/// Builds the catalog of every provider id the shorten endpoint accepts.
///
/// | id | adapter | reported as |
/// |----|---------|-------------|
/// | `is.gd`, `v.gd` | [`GdProvider`] | `is.gd`, `v.gd` |
/// | `tinyurl` | [`TinyUrlProvider`] | `TinyURL` |
/// | `t.ly` | [`TlyProvider`], backup v.gd | `t.ly` |
/// | `cleanuri` | [`CleanUriProvider`] | `CleanURI` |
/// | `shortlink` | [`ShortIoProvider`], backup is.gd | `ShortLink` |
/// | `bit.ly`, `cutt.ly` | is.gd | `is.gd (Bit.ly fallback)`, ... |
/// | `rebrand.ly`, `click.ly` | v.gd | `v.gd (Rebrand.ly fallback)`, ... |
/// | `tiny.cc`, `shorter.gg` | is.gd | own name |
/// | `shorter.me`, `spoo.me` | v.gd | own name |
pub fn standard_catalog(client: &RequestClient, endpoints: &ProviderEndpoints) -> ProviderCatalog {
    let is_gd: Arc<dyn ShortenProvider> =
        Arc::new(GdProvider::is_gd(client.clone(), &endpoints.is_gd));
    let v_gd: Arc<dyn ShortenProvider> =
        Arc::new(GdProvider::v_gd(client.clone(), &endpoints.v_gd));

    let tly = Arc::new(WithFallback::new(
        "t.ly",
        Arc::new(TlyProvider::new(client.clone(), &endpoints.tly)),
        v_gd.clone(),
    ));
    let short_link = Arc::new(WithFallback::new(
        "ShortLink",
        Arc::new(ShortIoProvider::new(client.clone(), &endpoints.short_io)),
        is_gd.clone(),
    ));

    let mut catalog = ProviderCatalog::new();
    catalog
        .register("is.gd", "is.gd", is_gd.clone())
        .register("v.gd", "v.gd", v_gd.clone())
        .register(
            "tinyurl",
            "TinyURL",
            Arc::new(TinyUrlProvider::new(client.clone(), &endpoints.tinyurl)),
        )
        .register("t.ly", "t.ly", tly)
        .register(
            "cleanuri",
            "CleanURI",
            Arc::new(CleanUriProvider::new(client.clone(), &endpoints.cleanuri)),
        )
        .register("shortlink", "ShortLink", short_link)
        .register("bit.ly", "is.gd (Bit.ly fallback)", is_gd.clone())
        .register("rebrand.ly", "v.gd (Rebrand.ly fallback)", v_gd.clone())
        .register("cutt.ly", "is.gd (Cutt.ly fallback)", is_gd.clone())
        .register("click.ly", "v.gd (click.ly fallback)", v_gd.clone())
        .register("tiny.cc", "tiny.cc", is_gd.clone())
        .register("shorter.me", "shorter.me", v_gd.clone())
        .register("shorter.gg", "shorter.gg", is_gd)
        .register("spoo.me", "spoo.me", v_gd);

    catalog
}
