//! Domain layer: request-scoped values, provider contracts and failure types.
//!
//! # Architecture
//!
//! - [`entities`] - Transient request/response values
//! - [`providers`] - Adapter trait, catalog and fallback ordering
//! - [`errors`] - Upstream failure taxonomy
//!
//! The domain layer has no knowledge of HTTP clients or Axum. Concrete
//! adapters live in [`crate::infrastructure::providers`].

pub mod entities;
pub mod errors;
pub mod providers;
