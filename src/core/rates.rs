//! Exchange rate abstractions: the rate table and the provider contract.

use crate::core::currency::CurrencyCode;
use anyhow::{Result, ensure};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conversion ratios for every supported currency, relative to USD = 1.
///
/// One field per currency keeps the table total: there is no way to build or
/// deserialize a table that is missing a code. Instances are replaced
/// wholesale on refresh, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RateTable {
    usd: f64,
    mxn: f64,
    cop: f64,
    eur: f64,
}

// Snapshot shipped with the binary, used when no fetched or cached rates
// exist.
const BUILTIN_MXN: f64 = 16.71;
const BUILTIN_COP: f64 = 3936.85;
const BUILTIN_EUR: f64 = 0.92;

impl RateTable {
    /// Builds a table with USD pinned to 1. Rejects rates that are not
    /// strictly positive finite numbers, so downstream conversion can divide
    /// by any rate without guarding.
    pub fn new(mxn: f64, cop: f64, eur: f64) -> Result<Self> {
        let table = RateTable {
            usd: 1.0,
            mxn,
            cop,
            eur,
        };
        ensure!(table.is_valid(), "Invalid rate table: {table:?}");
        Ok(table)
    }

    pub fn builtin() -> Self {
        RateTable {
            usd: 1.0,
            mxn: BUILTIN_MXN,
            cop: BUILTIN_COP,
            eur: BUILTIN_EUR,
        }
    }

    pub fn get(&self, code: CurrencyCode) -> f64 {
        match code {
            CurrencyCode::Usd => self.usd,
            CurrencyCode::Mxn => self.mxn,
            CurrencyCode::Cop => self.cop,
            CurrencyCode::Eur => self.eur,
        }
    }

    /// Holds for every table built through [`RateTable::new`]. Deserialized
    /// tables must be re-checked before use.
    pub fn is_valid(&self) -> bool {
        self.usd == 1.0
            && CurrencyCode::ALL
                .iter()
                .all(|c| self.get(*c).is_finite() && self.get(*c) > 0.0)
    }
}

/// Where the currently displayed rates came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateOrigin {
    /// Fetched from the remote endpoint in this invocation.
    Live,
    /// Served from a cache entry still inside the freshness window.
    Cached { as_of: DateTime<Utc> },
    /// Fetch failed; served from a cache entry past the freshness window.
    Stale { as_of: DateTime<Utc> },
    /// Fetch failed and no cache entry exists; built-in snapshot.
    Builtin,
}

/// A rate table together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    pub table: RateTable,
    pub origin: RateOrigin,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable>;
}
