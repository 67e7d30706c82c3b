//! Configuration and upstream endpoint constants.

use crate::types::{HttpConfig, Result};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Base URL of the API explorer service.
pub const EXPLORER_BASE: &str = "https://apis-explorer.appspot.com";

/// Path of the bootstrap loader script.
pub const BOOTSTRAP_PATH: &str = "/embedded/com.google.api.explorer.Embedded.nocache.js";

/// Path pieces of the keyed cache script: prefix + script key + suffix.
pub const SCRIPT_PATH_PREFIX: &str = "/embedded/";
pub const SCRIPT_PATH_SUFFIX: &str = ".cache.js";

/// Callee name of the bootstrap call carrying the script keys.
pub const KEYLIST_CALLEE: &str = "unflattenKeylistIntoAnswers";

/// Name the credential is declared under in the cache script.
pub const CREDENTIAL_IDENT: &str = "API_KEY";

/// YouTube API key discovery via the Google API Explorer scripts.
#[derive(Parser, Debug, Clone)]
#[command(name = "keyscout")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Custom User-Agent string
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Override the explorer base URL (stub servers, mirrors)
    #[arg(long, env = "KEYSCOUT_BASE_URL", hide = true)]
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            json: false,
            output: None,
            timeout: 30,
            user_agent: None,
            base_url: None,
        }
    }
}

impl Config {
    /// Get HTTP configuration from CLI settings.
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout_secs: self.timeout,
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| HttpConfig::default().user_agent),
        }
    }

    /// Resolve the endpoint set, honoring a base URL override.
    pub fn endpoints(&self) -> Result<Endpoints> {
        match &self.base_url {
            Some(raw) => Ok(Endpoints::with_base(Url::parse(raw)?)),
            None => Ok(Endpoints::default()),
        }
    }
}

/// The two upstream resources, resolved against one base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base: Url::parse(EXPLORER_BASE).expect("static base URL is valid"),
        }
    }
}

impl Endpoints {
    /// Endpoint set rooted at a non-default base URL.
    pub fn with_base(base: Url) -> Self {
        Self { base }
    }

    /// URL of the bootstrap loader script.
    pub fn bootstrap_url(&self) -> Result<Url> {
        Ok(self.base.join(BOOTSTRAP_PATH)?)
    }

    /// URL of the cache script named by a candidate script key.
    pub fn script_url(&self, key: &str) -> Result<Url> {
        let path = format!("{}{}{}", SCRIPT_PATH_PREFIX, key, SCRIPT_PATH_SUFFIX);
        Ok(self.base.join(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.bootstrap_url().unwrap().as_str(),
            "https://apis-explorer.appspot.com/embedded/com.google.api.explorer.Embedded.nocache.js"
        );
        assert_eq!(
            endpoints.script_url("abc123").unwrap().as_str(),
            "https://apis-explorer.appspot.com/embedded/abc123.cache.js"
        );
    }

    #[test]
    fn test_base_url_override() {
        let config = Config {
            base_url: Some("http://127.0.0.1:8080".to_string()),
            ..Config::default()
        };

        let endpoints = config.endpoints().unwrap();
        assert_eq!(
            endpoints.script_url("k1").unwrap().as_str(),
            "http://127.0.0.1:8080/embedded/k1.cache.js"
        );
    }
}
