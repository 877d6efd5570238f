//! # Link Relay
//!
//! A URL shortening and unshortening relay built with Axum. Links are not
//! stored: every request is proxied to public shortening services, trying them
//! in priority order until one answers.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Request values, provider trait and catalog, error taxonomy
//! - **Application Layer** ([`application`]) - Fallback chain and short URL resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP helper, provider adapters, resolver API
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Degraded Operation
//!
//! Upstream failures never become error responses. Shortening falls back to a
//! synthetic `https://short.ly/...` link flagged `isDemo`, and unshortening to
//! a mock target flagged with a `note`. Only invalid input yields `400`.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"url":"example.com","service":"is.gd","linkType":"profile"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenService, UnshortenService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{LinkType, ShortenOutcome, UnshortenOutcome};
    pub use crate::domain::providers::{ProviderCatalog, ShortenProvider};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::{HttpSettings, RequestClient};
    pub use crate::infrastructure::providers::{ProviderEndpoints, standard_catalog};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
