//! Currency rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Code of the local currency every rate is expressed against.
pub const BASE_CURRENCY: &str = "UAH";

/// Units of base currency one unit of `code` is worth.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate {
    pub code: String,
    pub rate: f64,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Rate {
    pub fn new(code: &str, rate: f64) -> Self {
        Rate {
            code: code.to_string(),
            rate,
            name: None,
            date: None,
        }
    }
}

/// A source of rates relative to [`BASE_CURRENCY`].
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self) -> Result<Vec<Rate>>;
}
