use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::core::currency::{Rate, RateSource};

const EXCHANGE_PATH: &str = "/NBUStatService/v1/statdirectory/exchange?json";

// One entry of the NBU exchange listing
#[derive(Debug, Deserialize)]
struct NbuRate {
    #[serde(default)]
    txt: Option<String>,
    rate: f64,
    cc: String,
    #[serde(default)]
    exchangedate: Option<String>,
}

impl From<NbuRate> for Rate {
    fn from(item: NbuRate) -> Self {
        let date = item
            .exchangedate
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%d.%m.%Y").ok());
        Rate {
            code: item.cc,
            rate: item.rate,
            name: item.txt,
            date,
        }
    }
}

/// Official UAH exchange rates published by the National Bank of Ukraine.
pub struct NbuRateProvider {
    base_url: String,
    timeout: Duration,
}

impl NbuRateProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        NbuRateProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl RateSource for NbuRateProvider {
    #[instrument(name = "NbuRateFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_rates(&self) -> Result<Vec<Rate>> {
        let url = format!("{}{}", self.base_url, EXCHANGE_PATH);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("hryvnia/0.1")
            .timeout(self.timeout)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for NBU exchange rates URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for NBU exchange rates",
                response.status()
            ));
        }

        let text = response.text().await?;
        let items: Vec<NbuRate> = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                error!(error = ?e, response = %text, "Failed to parse NBU response");
                return Err(anyhow!(
                    "Failed to parse NBU exchange rate response: {}",
                    e
                ));
            }
        };

        debug!(count = items.len(), "Received NBU exchange rates");
        Ok(items.into_iter().map(Rate::from).collect())
    }
}
