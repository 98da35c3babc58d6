use dotenvy::{dotenv, from_filename, var};
use tracing::debug;

use crate::services::{currencies::CurrencyCode, market_data::fx_rates::DEFAULT_RATES_URL};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rates_url: String,
    pub base_currency: CurrencyCode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rates_url: DEFAULT_RATES_URL.to_string(),
            base_currency: CurrencyCode::new("USD"),
        }
    }
}

impl Config {
    /// Reads `FX_RATES_URL` and `FX_BASE_CURRENCY`, falling back to the public
    /// service and USD.
    pub fn from_env() -> Self {
        Config::from_lookup(get_env_variable)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let config = Config {
            rates_url: lookup("FX_RATES_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.rates_url),
            base_currency: lookup("FX_BASE_CURRENCY")
                .filter(|code| !code.trim().is_empty())
                .map(CurrencyCode::new)
                .unwrap_or(defaults.base_currency),
        };
        debug!("Using configuration {:?}", config);
        config
    }
}

pub fn get_env_variable(variable_to_get: &str) -> Option<String> {
    let environment = var("RUST_ENV").unwrap_or_else(|_| "development".into());

    match environment.as_str() {
        "development" => from_filename(".env.dev").ok(),
        "production" => from_filename(".env.prod").ok(),
        _ => dotenv().ok(),
    };
    var(variable_to_get).ok()
}
