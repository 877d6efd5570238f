//! Application layer services implementing the request orchestration.
//!
//! Services consume the provider abstractions from the domain layer and give
//! HTTP handlers a small API that never fails because of an upstream.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Provider fallback chain
//! - [`services::unshorten_service::UnshortenService`] - Short URL resolution

pub mod services;
