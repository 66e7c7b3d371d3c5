//! fastFOREX REST client.
//!
//! Implements [`RateSource`] against the fastFOREX `fetch-one` endpoint.
//! The API returns a result map keyed by upper-cased quote currency and an
//! `error` field on failure.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::port::RateSource;

const FETCH_ONE_PATH: &str = "/fetch-one";

/// The fastFOREX plan allows frequent queries; this matches the documented
/// refresh cadence of the feed itself.
const PREFERRED_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct FetchOneResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    result: HashMap<String, f64>,
}

/// HTTP client for the fastFOREX API.
pub struct FastForexClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl FastForexClient {
    #[must_use]
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl RateSource for FastForexClient {
    async fn fetch_rate(&self, base: &str, quote: &str) -> Result<f64> {
        let url = format!("{}{}", self.base_url, FETCH_ONE_PATH);
        debug!(base, quote, "fetching reference rate");

        let response = self
            .http
            .get(&url)
            .query(&[("from", base), ("to", quote), ("api_key", self.api_key.as_str())])
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::RateService(format!(
                "rate API returned status {}",
                response.status()
            )));
        }

        let body: FetchOneResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(Error::RateService(format!("rate API error: {error}")));
        }

        body.result
            .get(&quote.to_uppercase())
            .copied()
            .ok_or_else(|| Error::RateService(format!("rate for {quote} missing from response")))
    }

    fn preferred_poll_interval(&self) -> Duration {
        PREFERRED_POLL_INTERVAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fetch_one_response() {
        let body: FetchOneResponse = serde_json::from_str(
            r#"{"base": "USD", "result": {"JPY": 150.25}, "updated": "2024-06-04 01:00:00", "ms": 4}"#,
        )
        .expect("parse response");

        assert!(body.error.is_none());
        assert_eq!(body.result.get("JPY"), Some(&150.25));
    }

    #[test]
    fn parses_error_response() {
        let body: FetchOneResponse =
            serde_json::from_str(r#"{"error": "api_key_invalid"}"#).expect("parse response");

        assert_eq!(body.error.as_deref(), Some("api_key_invalid"));
        assert!(body.result.is_empty());
    }
}
