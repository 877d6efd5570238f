//! Base URLs of the upstream shortening APIs.

/// Where each adapter sends its requests.
///
/// Defaults point at the public services. [`ProviderEndpoints::under`] routes
/// every provider below a single base, which is how tests and local fakes
/// stand in for the real upstreams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub is_gd: String,
    pub v_gd: String,
    pub tinyurl: String,
    pub tly: String,
    pub cleanuri: String,
    pub short_io: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            is_gd: "https://is.gd".to_string(),
            v_gd: "https://v.gd".to_string(),
            tinyurl: "https://tinyurl.com".to_string(),
            tly: "https://t.ly".to_string(),
            cleanuri: "https://cleanuri.com".to_string(),
            short_io: "https://api.short.io".to_string(),
        }
    }
}

impl ProviderEndpoints {
    /// Places every provider at `{base}/{provider-host}`.
    ///
    /// ```ignore
    /// let endpoints = ProviderEndpoints::under("http://127.0.0.1:8080");
    /// assert_eq!(endpoints.is_gd, "http://127.0.0.1:8080/is.gd");
    /// ```
    pub fn under(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            is_gd: format!("{base}/is.gd"),
            v_gd: format!("{base}/v.gd"),
            tinyurl: format!("{base}/tinyurl"),
            tly: format!("{base}/t.ly"),
            cleanuri: format!("{base}/cleanuri"),
            short_io: format!("{base}/short.io"),
        }
    }
}
