//! Asynchronous max-HP lookups for the battle tracker.
//!
//! A percentage-only switch-in leaves the tracker without a real max HP for
//! that side; [`BattleState::take_stat_queries`] surfaces the lookups it
//! wants. This crate answers them: it fetches the pokedex, computes the
//! Gen 1 max HP at the combatant's level, and delivers the completion over
//! an mpsc channel so the single-writer event loop can apply it via
//! [`BattleState::apply_stat_lookup`] — which discards results that went
//! stale while the query was in flight.
//!
//! [`BattleState::take_stat_queries`]: ringside_battle::BattleState::take_stat_queries
//! [`BattleState::apply_stat_lookup`]: ringside_battle::BattleState::apply_stat_lookup
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use ringside_lookup::{StatLookupClient, spawn_lookup};
//! use tokio::sync::mpsc;
//!
//! let client = Arc::new(StatLookupClient::new());
//! let (tx, mut rx) = mpsc::channel(16);
//!
//! // After each processed line:
//! for query in battle.take_stat_queries() {
//!     spawn_lookup(client.clone(), query, tx.clone());
//! }
//!
//! // On the same loop, drain completions back into the tracker:
//! while let Ok(result) = rx.try_recv() {
//!     battle.apply_stat_lookup(result.side, &result.species, result.max_hp);
//! }
//! ```

mod dex;

pub use dex::gen1_max_hp;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use ringside_battle::{StatQuery, normalize_name};
use ringside_protocol::Side;
use tokio::sync::mpsc;
use tracing::warn;

const POKEDEX_URL: &str = "https://play.pokemonshowdown.com/data/pokedex.json";

/// A completed lookup, tagged with the side and species it was issued for
/// so the tracker can detect staleness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub side: Side,
    pub species: String,
    pub max_hp: u32,
}

/// Client for the pokedex stat service
pub struct StatLookupClient {
    http: reqwest::Client,
    pokedex_url: String,
}

impl StatLookupClient {
    pub fn new() -> Self {
        Self::with_url(POKEDEX_URL)
    }

    /// Point the client at a different pokedex endpoint
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            pokedex_url: url.into(),
        }
    }

    /// Fetch the pokedex and compute a species' Gen 1 max HP at a level.
    ///
    /// May be arbitrarily slow or fail outright; callers treat it as
    /// fire-and-forget and never block line processing on it.
    pub async fn query_max_hp(&self, species: &str, level: u8) -> Result<u32> {
        let response = self
            .http
            .get(&self.pokedex_url)
            .send()
            .await
            .context("pokedex request failed")?;

        let pokedex: serde_json::Value =
            response.json().await.context("pokedex decode failed")?;

        let key = normalize_name(species);
        let entry = pokedex
            .get(&key)
            .ok_or_else(|| anyhow!("species not in pokedex: {}", species))?;

        Ok(gen1_max_hp(dex::base_hp_of(entry), level as u32))
    }
}

impl Default for StatLookupClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a background lookup for one query.
///
/// The completion is delivered over `results`; failures are logged and
/// produce nothing, which the tracker already tolerates.
pub fn spawn_lookup(
    client: Arc<StatLookupClient>,
    query: StatQuery,
    results: mpsc::Sender<LookupResult>,
) {
    tokio::spawn(async move {
        match client.query_max_hp(&query.species, query.level).await {
            Ok(max_hp) => {
                let result = LookupResult {
                    side: query.side,
                    species: query.species,
                    max_hp,
                };
                if results.send(result).await.is_err() {
                    warn!("lookup result receiver dropped");
                }
            }
            Err(err) => {
                warn!(species = %query.species, error = %err, "stat lookup failed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_failed_lookup_produces_no_result() {
        let client = Arc::new(StatLookupClient::with_url("http://127.0.0.1:1/pokedex.json"));
        let (tx, mut rx) = mpsc::channel(4);

        let query = StatQuery {
            side: Side::Enemy,
            species: "Snorlax".to_string(),
            level: 100,
        };
        spawn_lookup(client, query, tx);

        // The task drops its sender on failure, closing the channel.
        let received = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("channel should close instead of hanging");
        assert!(received.is_none());
    }
}
