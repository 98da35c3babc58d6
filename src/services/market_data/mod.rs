pub mod fx_rates;
