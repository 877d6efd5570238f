//! Tracing subscriber setup shared by the server and the CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `log_level` is an `EnvFilter` directive such as `info` or
/// `link_relay=debug,tower_http=info`; an invalid directive falls back to
/// `info`. `log_format` selects `json` output, anything else is plain text.
pub fn init(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
