//! Cached rate storage abstractions.

use crate::core::rates::RateTable;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a cached table is served without hitting the network.
pub const FRESHNESS_WINDOW_MS: i64 = 3_600_000;

/// A persisted rate table with the wall-clock time it was fetched.
///
/// Entries are overwritten on every successful fetch and never expire on
/// their own: an arbitrarily old entry is still the last-resort fallback
/// when the network is down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub rates: RateTable,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(rates: RateTable, timestamp: DateTime<Utc>) -> Self {
        CacheEntry { rates, timestamp }
    }

    /// Fresh means strictly younger than the window; an entry aged exactly
    /// [`FRESHNESS_WINDOW_MS`] is already stale.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp) < Duration::milliseconds(FRESHNESS_WINDOW_MS)
    }
}

/// One-slot persistence for the rate cache.
///
/// Implementations must treat failures as cache misses: the store is an
/// optimization, not a source of truth, and no caller handles its errors.
#[async_trait]
pub trait RateStore: Send + Sync {
    async fn load(&self) -> Option<CacheEntry>;
    async fn save(&self, entry: &CacheEntry);
}
