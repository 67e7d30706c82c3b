//! HTTP fetcher for the upstream scripts.

use crate::types::{HttpConfig, KeyscoutError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Fetcher that buffers complete response bodies.
///
/// Each resource is requested exactly once — no retries, no rate limiting.
/// Callers decide what a failure means for the wider pipeline.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a new fetcher.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .http1_only()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a resource and return the full body as text.
    pub async fn fetch_text(&self, url: Url) -> Result<String> {
        trace!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(KeyscoutError::Transport(
                response.error_for_status().unwrap_err(),
            ));
        }

        let target = response.url().clone();
        let body = response.text().await?;
        debug!("Fetched {} ({} bytes)", target, body.len());

        Ok(body)
    }
}
