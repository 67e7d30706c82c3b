//! Discovery orchestration.

use crate::config::{Config, Endpoints};
use crate::extract::{CredentialExtractor, ScriptKeyExtractor};
use crate::fetch::Fetcher;
use crate::resolver::RaceResolver;
use crate::types::{Credential, DiscoveryResult, HttpConfig, Result};
use std::sync::Arc;
use std::time::Instant;

/// Orchestrates the two-stage discovery pipeline.
pub struct KeyFinder {
    script_keys: ScriptKeyExtractor,
    resolver: RaceResolver,
}

impl KeyFinder {
    /// Create a finder from CLI settings.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoints(&config.http_config(), config.endpoints()?)
    }

    /// Create a finder against a specific endpoint set.
    pub fn with_endpoints(http: &HttpConfig, endpoints: Endpoints) -> Result<Self> {
        let fetcher = Arc::new(Fetcher::new(http)?);

        Ok(Self {
            script_keys: ScriptKeyExtractor::new(fetcher.clone(), endpoints.clone()),
            resolver: RaceResolver::new(CredentialExtractor::new(fetcher, endpoints)),
        })
    }

    /// Run one discovery and report on it.
    ///
    /// Issues exactly one bootstrap fetch, then races one cache-script fetch
    /// per candidate key.
    pub async fn discover(&self) -> Result<DiscoveryResult> {
        let start = Instant::now();

        let keys = self.script_keys.fetch_script_keys().await?;
        let candidates = keys.len();
        let credential = self.resolver.resolve(&keys).await?;

        Ok(DiscoveryResult {
            credential,
            candidates,
            duration_secs: start.elapsed().as_secs_f64(),
        })
    }

    /// Discover one credential.
    pub async fn get_credential(&self) -> Result<Credential> {
        Ok(self.discover().await?.credential)
    }
}

/// Discover a credential with default endpoints and HTTP settings.
pub async fn get_credential() -> Result<Credential> {
    KeyFinder::with_endpoints(&HttpConfig::default(), Endpoints::default())?
        .get_credential()
        .await
}
