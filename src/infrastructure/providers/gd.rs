//! is.gd and its sister service v.gd.
//!
//! Both accept a form-encoded POST to `/create.php` and answer with
//! `{"shorturl": ...}` or `{"errorcode": n, "errormessage": ...}`. Some
//! deployments answer with the bare short URL instead of JSON.

use crate::domain::errors::ProviderError;
use crate::domain::providers::ShortenProvider;
use crate::infrastructure::http::RequestClient;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, REFERER};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GdResponse {
    shorturl: Option<String>,
    errorcode: Option<serde_json::Value>,
    errormessage: Option<String>,
}

/// Adapter for the is.gd family of shorteners.
pub struct GdProvider {
    name: &'static str,
    host: &'static str,
    base_url: String,
    client: RequestClient,
}

impl GdProvider {
    pub fn is_gd(client: RequestClient, base_url: impl Into<String>) -> Self {
        Self {
            name: "is.gd",
            host: "is.gd",
            base_url: base_url.into(),
            client,
        }
    }

    pub fn v_gd(client: RequestClient, base_url: impl Into<String>) -> Self {
        Self {
            name: "v.gd",
            host: "v.gd",
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl ShortenProvider for GdProvider {
    async fn shorten(&self, url: &str) -> Result<String, ProviderError> {
        let base = self.base_url.trim_end_matches('/');

        let request = self
            .client
            .client()
            .post(format!("{base}/create.php"))
            .header(ACCEPT, "application/json, text/plain, */*")
            .header(REFERER, format!("{base}/"))
            .form(&[("format", "json"), ("url", url)]);

        let response = self.client.send(request).await?;

        if !response.status().is_success() {
            return Err(ProviderError::status(self.name, response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::invalid_response(self.name, e.to_string()))?;

        parse_response(self.name, self.host, &body)
    }
}

/// Extracts the short URL from a `/create.php` response body.
fn parse_response(
    provider: &'static str,
    host: &str,
    body: &str,
) -> Result<String, ProviderError> {
    match serde_json::from_str::<GdResponse>(body) {
        Ok(GdResponse {
            shorturl: Some(short),
            ..
        }) => return Ok(short),
        Ok(GdResponse {
            errorcode: Some(_),
            errormessage,
            ..
        }) => {
            return Err(ProviderError::upstream(
                provider,
                errormessage.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        Ok(_) => {}
        Err(_) => {
            let text = body.trim();
            if text.starts_with("http") && text.contains(host) {
                return Ok(text.to_string());
            }
        }
    }

    Err(ProviderError::invalid_response(provider, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_shorturl() {
        let result = parse_response("is.gd", "is.gd", r#"{"shorturl":"https://is.gd/abcdef"}"#);
        assert_eq!(result.unwrap(), "https://is.gd/abcdef");
    }

    #[test]
    fn test_parse_error_code() {
        let result = parse_response(
            "v.gd",
            "v.gd",
            r#"{"errorcode":1,"errormessage":"Please specify a URL to shorten."}"#,
        );

        match result.unwrap_err() {
            ProviderError::Upstream { provider, message } => {
                assert_eq!(provider, "v.gd");
                assert_eq!(message, "Please specify a URL to shorten.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_plain_text_url() {
        let result = parse_response("is.gd", "is.gd", "https://is.gd/plain\n");
        assert_eq!(result.unwrap(), "https://is.gd/plain");
    }

    #[test]
    fn test_parse_plain_text_wrong_host() {
        let result = parse_response("is.gd", "is.gd", "https://other.example/abc");
        assert!(matches!(
            result.unwrap_err(),
            ProviderError::InvalidResponse { .. }
        ));
    }

    #[test]
    fn test_parse_json_without_known_fields() {
        let result = parse_response("is.gd", "is.gd", r#"{"status":"ok"}"#);
        assert!(matches!(
            result.unwrap_err(),
            ProviderError::InvalidResponse { .. }
        ));
    }
}
