//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod providers;
pub mod shorten;
pub mod unshorten;

pub use health::health_handler;
pub use providers::providers_handler;
pub use shorten::shorten_handler;
pub use unshorten::unshorten_handler;
