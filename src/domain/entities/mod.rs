//! Transient values flowing through a single request.
//!
//! Nothing here is persisted; every value lives only for one request/response
//! cycle.
//!
//! - [`LinkType`] - Requested display category of a short link
//! - [`ShortenOutcome`] - Result of the provider fallback chain
//! - [`UnshortenOutcome`] - Resolved target of a short link

pub mod link_type;
pub mod outcome;

pub use link_type::LinkType;
pub use outcome::{DEMO_SERVICE_NAME, ShortenOutcome, UnshortenOutcome};
