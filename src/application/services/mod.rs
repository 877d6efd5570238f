//! Business logic services for the application layer.

pub mod shorten_service;
pub mod unshorten_service;

pub use shorten_service::ShortenService;
pub use unshorten_service::UnshortenService;
