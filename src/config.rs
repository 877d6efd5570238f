//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UPSTREAM_TIMEOUT_MS` - Per-attempt timeout for provider calls (default: 8000)
//! - `UPSTREAM_RETRIES` - Extra attempts after a network failure (default: 1, max: 5)
//! - `UPSTREAM_RETRY_DELAY_MS` - Pause between attempts (default: 1000)
//! - `DEMO_DOMAIN` - Host used for synthetic demo links (default: `short.ly`)
//! - `UNSHORTEN_API_URL` - Resolution API base (default: `https://unshorten.me/json`)
//! - `UPSTREAM_BASE_URL` - Route every provider below one base URL, for local fakes
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export UPSTREAM_TIMEOUT_MS="5000"
//! export LOG_FORMAT="json"
//! ```

use crate::infrastructure::http::HttpSettings;
use crate::infrastructure::providers::ProviderEndpoints;
use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub upstream_timeout_ms: u64,
    pub upstream_retries: u32,
    pub upstream_retry_delay_ms: u64,
    /// Host of the `https://{demo_domain}/{code}` links returned in demo mode.
    pub demo_domain: String,
    pub unshorten_api_url: String,
    /// When set, replaces every provider's real host; see [`ProviderEndpoints::under`].
    pub upstream_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            upstream_timeout_ms: 8_000,
            upstream_retries: 1,
            upstream_retry_delay_ms: 1_000,
            demo_domain: "short.ly".to_string(),
            unshorten_api_url: "https://unshorten.me/json".to_string(),
            upstream_base_url: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            upstream_timeout_ms: parse_var("UPSTREAM_TIMEOUT_MS")
                .unwrap_or(defaults.upstream_timeout_ms),
            upstream_retries: parse_var("UPSTREAM_RETRIES").unwrap_or(defaults.upstream_retries),
            upstream_retry_delay_ms: parse_var("UPSTREAM_RETRY_DELAY_MS")
                .unwrap_or(defaults.upstream_retry_delay_ms),
            demo_domain: env::var("DEMO_DOMAIN").unwrap_or(defaults.demo_domain),
            unshorten_api_url: env::var("UNSHORTEN_API_URL")
                .unwrap_or(defaults.unshorten_api_url),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - the upstream timeout is zero or the retry count exceeds 5
    /// - `demo_domain` is empty
    /// - an upstream URL is not HTTP(S)
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.upstream_timeout_ms == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_MS must be greater than 0");
        }

        if self.upstream_retries > 5 {
            anyhow::bail!(
                "UPSTREAM_RETRIES must be between 0 and 5, got {}",
                self.upstream_retries
            );
        }

        if self.demo_domain.trim().is_empty() {
            anyhow::bail!("DEMO_DOMAIN must not be empty");
        }

        if !is_http_url(&self.unshorten_api_url) {
            anyhow::bail!(
                "UNSHORTEN_API_URL must start with 'http://' or 'https://', got '{}'",
                self.unshorten_api_url
            );
        }

        if let Some(ref base) = self.upstream_base_url
            && !is_http_url(base)
        {
            anyhow::bail!(
                "UPSTREAM_BASE_URL must start with 'http://' or 'https://', got '{}'",
                base
            );
        }

        Ok(())
    }

    /// Timeout and retry policy for provider calls.
    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            timeout: Duration::from_millis(self.upstream_timeout_ms),
            retries: self.upstream_retries,
            retry_delay: Duration::from_millis(self.upstream_retry_delay_ms),
        }
    }

    /// Provider base URLs: the public hosts unless `UPSTREAM_BASE_URL` is set.
    pub fn provider_endpoints(&self) -> ProviderEndpoints {
        match &self.upstream_base_url {
            Some(base) => ProviderEndpoints::under(base),
            None => ProviderEndpoints::default(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Upstream: timeout {}ms, {} retr(y/ies), {}ms delay",
            self.upstream_timeout_ms,
            self.upstream_retries,
            self.upstream_retry_delay_ms
        );
        tracing::info!("  Demo domain: {}", self.demo_domain);
        tracing::info!("  Unshorten API: {}", self.unshorten_api_url);

        if let Some(ref base) = self.upstream_base_url {
            tracing::warn!("  Providers overridden: {}", base);
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "LOG_FORMAT",
        "UPSTREAM_TIMEOUT_MS",
        "UPSTREAM_RETRIES",
        "UPSTREAM_RETRY_DELAY_MS",
        "DEMO_DOMAIN",
        "UNSHORTEN_API_URL",
        "UPSTREAM_BASE_URL",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.upstream_timeout_ms = 0;
        assert!(config.validate().is_err());

        config.upstream_timeout_ms = 8_000;
        config.upstream_retries = 6;
        assert!(config.validate().is_err());

        config.upstream_retries = 0;
        assert!(config.validate().is_ok());

        config.unshorten_api_url = "ftp://unshorten.me".to_string();
        assert!(config.validate().is_err());

        config.unshorten_api_url = "https://unshorten.me/json".to_string();
        config.upstream_base_url = Some("localhost:9000".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_settings_from_config() {
        let config = Config::default();
        assert_eq!(config.http_settings(), HttpSettings::default());
    }

    #[test]
    fn test_provider_endpoints_override() {
        let mut config = Config::default();
        assert_eq!(config.provider_endpoints(), ProviderEndpoints::default());

        config.upstream_base_url = Some("http://127.0.0.1:9000".to_string());
        assert_eq!(
            config.provider_endpoints().tinyurl,
            "http://127.0.0.1:9000/tinyurl"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.upstream_timeout_ms, 8_000);
        assert_eq!(config.upstream_retries, 1);
        assert_eq!(config.demo_domain, "short.ly");
        assert!(config.upstream_base_url.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();

        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("UPSTREAM_TIMEOUT_MS", "2500");
            env::set_var("UPSTREAM_RETRIES", "3");
            env::set_var("DEMO_DOMAIN", "demo.example");
            env::set_var("UPSTREAM_BASE_URL", "http://localhost:9000");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.upstream_timeout_ms, 2500);
        assert_eq!(config.upstream_retries, 3);
        assert_eq!(config.demo_domain, "demo.example");
        assert_eq!(
            config.upstream_base_url.as_deref(),
            Some("http://localhost:9000")
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparseable_numbers() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("UPSTREAM_RETRIES", "many");
        }

        assert_eq!(Config::from_env().upstream_retries, 1);

        clear_env();
    }
}
