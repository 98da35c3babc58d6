use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::services::{currencies::CurrencyCode, errors::FxError};

pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest";

#[derive(Deserialize, Debug)]
struct ExchangeRateResponse {
    base: Option<String>,
    time_last_updated: Option<i64>,
    rates: HashMap<String, Decimal>,
}

/// Rates for a single fetch, each expressed as units of currency per one unit
/// of `base`.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<CurrencyCode, Decimal>,
    updated_at: Option<DateTime<Utc>>,
}

impl RateTable {
    /// Builds a table, dropping entries whose rate is zero or negative.
    pub fn new(
        base: CurrencyCode,
        rates: impl IntoIterator<Item = (CurrencyCode, Decimal)>,
    ) -> Self {
        let rates = rates
            .into_iter()
            .filter(|(code, rate)| {
                if rate.is_sign_positive() && !rate.is_zero() {
                    true
                } else {
                    warn!("Ignoring non-positive rate {} for {}", rate, code);
                    false
                }
            })
            .collect();
        RateTable {
            base,
            rates,
            updated_at: None,
        }
    }

    pub fn with_updated_at(mut self, updated_at: Option<DateTime<Utc>>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// The base currency always has a rate, one unless the service lists it.
    pub fn rate(&self, code: &CurrencyCode) -> Option<Decimal> {
        match self.rates.get(code.as_str()) {
            Some(rate) => Some(*rate),
            None if code == &self.base => Some(Decimal::ONE),
            None => None,
        }
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl ExchangeRateResponse {
    fn into_rate_table(self) -> RateTable {
        let base = CurrencyCode::new(self.base.unwrap_or_default());
        let updated_at = self
            .time_last_updated
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0));
        RateTable::new(
            base,
            self.rates
                .into_iter()
                .map(|(code, rate)| (CurrencyCode::new(code), rate)),
        )
        .with_updated_at(updated_at)
    }
}

/// Client for the public exchange rate service, one GET per fetch.
#[derive(Debug, Clone)]
pub struct ExchangeRateApi {
    client: Client,
    rates_url: String,
}

impl ExchangeRateApi {
    pub fn new(rates_url: &str) -> Self {
        ExchangeRateApi {
            client: Client::new(),
            rates_url: rates_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_live_rates(
        &self,
        base_currency: &CurrencyCode,
    ) -> Result<RateTable, FxError> {
        let url = format!("{}/{}", self.rates_url, base_currency);
        debug!("Fetching live exchange rates from {}", url);

        let res = self.client.get(&url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(
                "Exchange rate service returned: {} with message: {}",
                status, body
            );
            return Err(FxError::Status { status, body });
        }

        let exchange_rate_response = serde_json::from_str::<ExchangeRateResponse>(&body)?;
        let mut rate_table = exchange_rate_response.into_rate_table();
        // the service echoes the base back, but not every deployment does
        if rate_table.base.as_str().is_empty() {
            rate_table.base = base_currency.clone();
        }

        info!(
            "Fetched {} exchange rates for base {}",
            rate_table.len(),
            rate_table.base
        );
        Ok(rate_table)
    }
}
