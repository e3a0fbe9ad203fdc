use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::CurrencyCode;
use crate::core::rates::{RateProvider, RateTable};

// OpenErApiProvider implementation for RateProvider
pub struct OpenErApiProvider {
    base_url: String,
}

impl OpenErApiProvider {
    pub fn new(base_url: &str) -> Self {
        OpenErApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenErApiResponse {
    rates: HashMap<String, f64>,
}

fn rate_for(rates: &HashMap<String, f64>, code: CurrencyCode) -> Result<f64> {
    rates
        .get(code.as_str())
        .copied()
        .ok_or_else(|| anyhow!("Missing rate for {} in response", code))
}

#[async_trait]
impl RateProvider for OpenErApiProvider {
    #[instrument(name = "RateFetch", skip(self))]
    async fn fetch_rates(&self) -> Result<RateTable> {
        let url = format!("{}/v6/latest/USD", self.base_url);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("cambio/1.0").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} for URL: {}", response.status(), url));
        }

        let text = response.text().await?;
        let data: OpenErApiResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response: {}", e))?;

        let table = RateTable::new(
            rate_for(&data.rates, CurrencyCode::Mxn)?,
            rate_for(&data.rates, CurrencyCode::Cop)?,
            rate_for(&data.rates, CurrencyCode::Eur)?,
        )?;

        debug!("Fetched rates: {:?}", table);
        Ok(table)
    }
}
