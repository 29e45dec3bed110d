//! Rate table holding the latest known rate per currency code

use super::convert::convert;
use super::currency::{BASE_CURRENCY, Rate, RateSource};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::HashMap;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Rates used when the remote source is unavailable.
pub const FALLBACK_RATES: [(&str, f64); 5] = [
    ("UAH", 1.00),
    ("USD", 41.50),
    ("EUR", 44.80),
    ("GBP", 52.30),
    ("PLN", 10.20),
];

/// Outcome of [`RateTable::refresh`].
#[derive(Debug)]
pub enum RefreshStatus {
    /// Table was replaced with `count` remote rates.
    Updated { count: usize, at: DateTime<Local> },
    /// Remote fetch failed and the fallback rates were loaded.
    Fallback { error: anyhow::Error },
}

impl RefreshStatus {
    pub fn is_fallback(&self) -> bool {
        matches!(self, RefreshStatus::Fallback { .. })
    }
}

/// Result of converting an amount between two codes.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} {} = {:.2} {}",
            self.amount, self.from, self.result, self.to
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, f64>,
    names: HashMap<String, String>,
    as_of: Option<NaiveDate>,
    updated_at: Option<DateTime<Local>>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fallback() -> Self {
        let rates = FALLBACK_RATES
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect();
        RateTable {
            rates,
            ..Self::default()
        }
    }

    /// Builds a table from fetched rates. The base currency is always present
    /// at 1.0; later duplicates overwrite earlier ones.
    pub fn from_rates(fetched: Vec<Rate>) -> Self {
        let mut table = RateTable::new();
        table.rates.insert(BASE_CURRENCY.to_string(), 1.0);

        let mut dates = Vec::with_capacity(fetched.len());
        for entry in fetched {
            let code = entry.code.trim().to_uppercase();
            if code == BASE_CURRENCY {
                debug!(rate = entry.rate, "Ignoring fetched rate for base currency");
                continue;
            }
            if !entry.rate.is_finite() {
                warn!(code = %code, rate = entry.rate, "Skipping non-finite rate");
                continue;
            }
            if let Some(date) = entry.date {
                dates.push(date);
            }
            if let Some(name) = entry.name {
                table.names.insert(code.clone(), name);
            }
            table.rates.insert(code, entry.rate);
        }

        table.as_of = match dates.first() {
            Some(first) if dates.iter().all(|d| d == first) => Some(*first),
            _ => None,
        };
        table
    }

    /// Fetches a complete table from `source`.
    pub async fn fetch(source: &dyn RateSource) -> Result<Self> {
        let fetched = source.fetch_rates().await?;
        let mut table = Self::from_rates(fetched);
        table.updated_at = Some(Local::now());
        Ok(table)
    }

    /// Replaces the whole table from `source`, or with the fallback rates if
    /// the fetch fails. The old table stays intact until the new one is ready.
    pub async fn refresh(&mut self, source: &dyn RateSource) -> RefreshStatus {
        match Self::fetch(source).await {
            Ok(table) => {
                let count = table.len() - 1;
                let at = table.updated_at.unwrap_or_else(Local::now);
                *self = table;
                info!(count, "Exchange rates updated");
                RefreshStatus::Updated { count, at }
            }
            Err(error) => {
                warn!(error = %error, "Failed to load exchange rates, using fallback");
                self.load_fallback();
                RefreshStatus::Fallback { error }
            }
        }
    }

    pub fn load_fallback(&mut self) {
        *self = Self::fallback();
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Rate for `code`, treating unknown codes as the base currency.
    pub fn resolve_rate(&self, code: &str) -> f64 {
        self.rate(code).unwrap_or(1.0)
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Conversion {
        let from_rate = self.resolve_rate(from);
        let to_rate = self.resolve_rate(to);
        debug!(from, to, from_rate, to_rate, "Converting amount");
        Conversion {
            amount,
            from: from.to_string(),
            to: to.to_string(),
            result: convert(amount, from_rate, to_rate),
        }
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Publication date shared by every fetched rate, if any.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Rates ordered by code.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self
            .rates
            .iter()
            .map(|(code, rate)| (code.as_str(), *rate))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
