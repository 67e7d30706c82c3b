//! Race resolution: first successful candidate wins.

use crate::extract::CredentialExtractor;
use crate::types::{Credential, KeyscoutError, Result, ScriptKey};
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use tracing::debug;

/// Settle on the first future to complete with `Ok`.
///
/// All inputs run concurrently. If every future fails, the error is the last
/// failure in completion order; an empty input yields `Err(None)` immediately.
/// Once a winner settles, the remaining futures are dropped unpolled.
pub async fn first_ok<T, E, F>(
    futures: impl IntoIterator<Item = F>,
) -> std::result::Result<T, Option<E>>
where
    F: Future<Output = std::result::Result<T, E>>,
{
    let mut pending: FuturesUnordered<F> = futures.into_iter().collect();
    let mut last_error = None;

    while let Some(result) = pending.next().await {
        match result {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error)
}

/// Races one credential attempt per candidate script key.
pub struct RaceResolver {
    credentials: CredentialExtractor,
}

impl RaceResolver {
    /// Create a new resolver.
    pub fn new(credentials: CredentialExtractor) -> Self {
        Self { credentials }
    }

    /// Resolve the candidate set to a single credential.
    ///
    /// Attempts share no state. The race ends as soon as one attempt
    /// produces a credential; if all of them fail, the last failure stands
    /// in for the lot.
    pub async fn resolve(&self, keys: &[ScriptKey]) -> Result<Credential> {
        debug!("Racing {} candidate script keys", keys.len());

        let attempts = keys.iter().map(|key| self.credentials.fetch_credential(key));

        first_ok(attempts)
            .await
            .map_err(|cause| KeyscoutError::AllCandidatesFailed {
                cause: cause.map(Box::new),
            })
    }
}
