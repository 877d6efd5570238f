//! Outbound HTTP plumbing shared by adapters and the unshortener.

pub mod request_client;

pub use request_client::{BROWSER_USER_AGENT, HttpSettings, RequestClient};
