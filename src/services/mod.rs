pub mod converter;
pub mod currencies;
pub mod errors;
pub mod history;
pub mod market_data;
pub mod shared;
