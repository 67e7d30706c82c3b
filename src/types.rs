//! Core types and errors for the credential discovery pipeline.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during discovery.
#[derive(Error, Debug)]
pub enum KeyscoutError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("script parse error: {0}")]
    Parse(String),

    #[error("failed to extract credential for script key [{key}]: {message}")]
    Extraction { key: String, message: String },

    #[error("no credential found for script key [{0}]")]
    CredentialNotFound(String),

    #[error("all candidate script keys failed{}", fmt_cause(.cause))]
    AllCandidatesFailed { cause: Option<Box<KeyscoutError>> },
}

fn fmt_cause(cause: &Option<Box<KeyscoutError>>) -> String {
    match cause {
        Some(cause) => format!(": {}", cause),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, KeyscoutError>;

/// Opaque token naming the second-stage cache script to fetch.
pub type ScriptKey = String;

/// The discovered API key.
pub type Credential = String;

/// Outcome of one discovery run.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryResult {
    /// The discovered credential.
    pub credential: Credential,
    /// Number of candidate script keys raced.
    pub candidates: usize,
    /// Discovery duration in seconds.
    pub duration_secs: f64,
}

/// Configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (compatible; keyscout/0.1)".to_string(),
        }
    }
}
