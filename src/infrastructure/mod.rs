//! Infrastructure layer for external integrations.
//!
//! This layer implements the interfaces defined by the domain layer against
//! real HTTP upstreams.
//!
//! # Modules
//!
//! - [`http`] - Shared request helper with timeout and retry
//! - [`providers`] - Shortening service adapters and the standard catalog
//! - [`resolver`] - Third-party URL resolution API

pub mod http;
pub mod providers;
pub mod resolver;
