//! The fetch-then-cache-then-fallback flow behind every displayed table.

use crate::core::cache::{CacheEntry, RateStore};
use crate::core::rates::{RateOrigin, RateProvider, RateQuote, RateTable};
use chrono::Utc;
use tracing::{debug, warn};

/// Resolves the rate table for this invocation.
///
/// A fresh cache entry short-circuits the network. Otherwise one fetch is
/// attempted; on success the result is persisted and returned, on failure
/// the flow degrades to the cached entry of any age, then to the built-in
/// snapshot. This never fails: a network problem is a provenance change,
/// not an error.
pub async fn load_rates(provider: &dyn RateProvider, store: &dyn RateStore) -> RateQuote {
    let cached = store.load().await;

    if let Some(entry) = cached {
        if entry.is_fresh_at(Utc::now()) {
            debug!("Using cached rates from {}", entry.timestamp);
            return RateQuote {
                table: entry.rates,
                origin: RateOrigin::Cached {
                    as_of: entry.timestamp,
                },
            };
        }
        debug!("Cached rates from {} are stale", entry.timestamp);
    }

    match provider.fetch_rates().await {
        Ok(table) => {
            let entry = CacheEntry::new(table, Utc::now());
            store.save(&entry).await;
            RateQuote {
                table,
                origin: RateOrigin::Live,
            }
        }
        Err(e) => {
            warn!("Rate fetch failed, falling back: {e:#}");
            match cached {
                Some(entry) => RateQuote {
                    table: entry.rates,
                    origin: RateOrigin::Stale {
                        as_of: entry.timestamp,
                    },
                },
                None => RateQuote {
                    table: RateTable::builtin(),
                    origin: RateOrigin::Builtin,
                },
            }
        }
    }
}
