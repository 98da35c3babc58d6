use std::{borrow::Borrow, collections::HashMap, fmt};

use lazy_static::lazy_static;
use tracing::debug;

/// ISO 4217 style currency identifier, always stored uppercase.
///
/// No validation happens beyond trimming and uppercasing; whether a code is
/// actually supported is decided by the rate table it is looked up in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        CurrencyCode(code.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CurrencyCode {
    fn from(value: String) -> Self {
        CurrencyCode::new(value)
    }
}

impl From<&str> for CurrencyCode {
    fn from(value: &str) -> Self {
        CurrencyCode::new(value)
    }
}

impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const COUNTRY_TO_CURRENCY: [(&str, &str); 38] = [
    ("Nigeria", "NGN"),
    ("South Africa", "ZAR"),
    ("Egypt", "EGP"),
    ("Kenya", "KES"),
    ("Ghana", "GHS"),
    ("Tanzania", "TZS"),
    ("Uganda", "UGX"),
    ("Morocco", "MAD"),
    ("Algeria", "DZD"),
    ("Angola", "AOA"),
    ("Ethiopia", "ETB"),
    ("Senegal", "XOF"),
    ("Botswana", "BWP"),
    ("Namibia", "NAD"),
    ("Zambia", "ZMW"),
    ("Zimbabwe", "ZWL"),
    ("Togo", "XOF"),
    ("Cameroon", "XAF"),
    ("United States", "USD"),
    ("Canada", "CAD"),
    ("Mexico", "MXN"),
    ("United Kingdom", "GBP"),
    ("Germany", "EUR"),
    ("France", "EUR"),
    ("Italy", "EUR"),
    ("Spain", "EUR"),
    ("Switzerland", "CHF"),
    ("China", "CNY"),
    ("Japan", "JPY"),
    ("India", "INR"),
    ("South Korea", "KRW"),
    ("Singapore", "SGD"),
    ("Saudi Arabia", "SAR"),
    ("Australia", "AUD"),
    ("New Zealand", "NZD"),
    ("Brazil", "BRL"),
    ("Argentina", "ARS"),
    ("Chile", "CLP"),
];

lazy_static! {
    static ref CURRENCY_BY_COUNTRY: HashMap<&'static str, &'static str> =
        COUNTRY_TO_CURRENCY.into_iter().collect();
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest,
/// so "SOUTH africa" becomes "South Africa".
fn title_case(input: &str) -> String {
    let mut titled = String::with_capacity(input.len());
    let mut previous_is_alphabetic = false;
    for c in input.chars() {
        if previous_is_alphabetic {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        previous_is_alphabetic = c.is_alphabetic();
    }
    titled
}

/// Maps a country name or currency code typed by the user to a currency code.
///
/// Input that isn't a known country is passed through as a code. Resolution
/// never fails; unsupported codes surface when converting.
pub fn resolve_currency_code(user_input: &str) -> CurrencyCode {
    let formatted_input = title_case(user_input.trim());
    match CURRENCY_BY_COUNTRY.get(formatted_input.as_str()) {
        Some(code) => {
            debug!("Resolved country '{}' to {}", formatted_input, code);
            CurrencyCode::new(code)
        }
        None => CurrencyCode::new(&formatted_input),
    }
}
