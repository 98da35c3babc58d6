use rust_decimal::Decimal;
use thiserror::Error;

use super::currencies::CurrencyCode;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Couldn't reach the exchange rate service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Exchange rate service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Couldn't parse exchange rate payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Either leg of the conversion is missing from the rate table.
    #[error("No exchange rate available to convert {from} to {to}")]
    UnsupportedCurrency { from: CurrencyCode, to: CurrencyCode },

    /// Both rates exist but the result doesn't fit in a `Decimal`.
    #[error("Converting {amount} {from} to {to} is out of range")]
    AmountOutOfRange {
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    },
}

impl FxError {
    pub fn is_unsupported_currency(&self) -> bool {
        matches!(self, FxError::UnsupportedCurrency { .. })
    }
}
