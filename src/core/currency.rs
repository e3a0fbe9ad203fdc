//! The closed set of supported currencies and their display metadata.

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Mxn,
    Cop,
    Eur,
}

/// Static display data for a currency. Loaded once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyMeta {
    pub symbol: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub country: &'static str,
}

impl CurrencyCode {
    /// Fixed iteration order for every rendered list of conversions.
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::Usd,
        CurrencyCode::Mxn,
        CurrencyCode::Cop,
        CurrencyCode::Eur,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Mxn => "MXN",
            CurrencyCode::Cop => "COP",
            CurrencyCode::Eur => "EUR",
        }
    }

    pub fn meta(&self) -> &'static CurrencyMeta {
        match self {
            CurrencyCode::Usd => &CurrencyMeta {
                symbol: "$",
                name: "US Dollar",
                flag: "🇺🇸",
                country: "United States",
            },
            CurrencyCode::Mxn => &CurrencyMeta {
                symbol: "$",
                name: "Mexican Peso",
                flag: "🇲🇽",
                country: "Mexico",
            },
            CurrencyCode::Cop => &CurrencyMeta {
                symbol: "$",
                name: "Colombian Peso",
                flag: "🇨🇴",
                country: "Colombia",
            },
            CurrencyCode::Eur => &CurrencyMeta {
                symbol: "€",
                name: "Euro",
                flag: "🇪🇺",
                country: "European Union",
            },
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::Usd),
            "MXN" => Ok(CurrencyCode::Mxn),
            "COP" => Ok(CurrencyCode::Cop),
            "EUR" => Ok(CurrencyCode::Eur),
            other => Err(anyhow!(
                "Unsupported currency: {other}. Supported: USD, MXN, COP, EUR"
            )),
        }
    }
}
