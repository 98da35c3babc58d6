pub mod convert;
pub mod shared;

use std::io::{self, Write};

use clap::Parser;
use rust_decimal::Decimal;
use spinners_rs::{Spinner, Spinners};

use convert::{collect_request, report_conversions, ConversionOutcome};
use shared::{confirm_action, parse_amount};

use crate::services::{
    currencies::CurrencyCode,
    history::ConversionHistory,
    market_data::fx_rates::ExchangeRateApi,
    shared::env::Config,
};

/// Convert an amount into up to five currencies at live exchange rates.
///
/// Anything not given as a flag is asked for interactively.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Amount to convert, must be positive
    #[arg(short, long, value_parser = parse_amount)]
    pub amount: Option<Decimal>,
    /// Source country or currency code
    #[arg(short, long)]
    pub from: Option<String>,
    /// Target countries or currency codes, comma separated (up to 5)
    #[arg(short, long)]
    pub to: Option<String>,
    /// Currency the rates are fetched against, defaults to FX_BASE_CURRENCY or USD
    #[arg(short, long)]
    pub base: Option<String>,
    /// Show the conversion history without asking
    #[arg(long)]
    pub history: bool,
}

pub async fn cli() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    let mut out = io::stdout();

    writeln!(out, "=== Welcome to the Smart Currency Converter ===\n")?;
    let request = collect_request(&args, &mut io::stdin().lock(), &mut out)?;

    let base_currency = args
        .base
        .as_deref()
        .map(CurrencyCode::new)
        .unwrap_or(config.base_currency);
    let api = ExchangeRateApi::new(&config.rates_url);

    let mut sp = Spinner::new(Spinners::Point, "Fetching live exchange rates");
    sp.start();
    let rates = api.fetch_live_rates(&base_currency).await;
    sp.stop();

    let mut history = ConversionHistory::new();
    let outcome = report_conversions(&request, rates, &mut history, &mut out)?;
    if outcome == ConversionOutcome::RatesUnavailable {
        return Ok(());
    }

    let show_history = args.history
        || confirm_action(
            &mut io::stdin().lock(),
            &mut out,
            "\nDo you want to see your conversion history?",
        )?;
    if show_history {
        history.show(&mut out)?;
    }
    Ok(())
}
