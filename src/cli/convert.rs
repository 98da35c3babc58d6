use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::services::{
    converter::convert_currency,
    currencies::{resolve_currency_code, CurrencyCode},
    errors::FxError,
    history::{ConversionHistory, ConversionRecord},
    market_data::fx_rates::RateTable,
};

use super::{
    shared::{prompt, prompt_amount},
    Args,
};

pub const MAX_TARGETS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: Decimal,
    pub currency_from: CurrencyCode,
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    RatesUnavailable,
    Completed { succeeded: usize, failed: usize },
}

/// Splits a comma separated list, dropping blanks and keeping the first
/// [`MAX_TARGETS`] entries.
pub fn parse_targets(input: &str) -> Vec<String> {
    let targets: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|target| !target.is_empty())
        .map(str::to_string)
        .collect();

    if targets.len() > MAX_TARGETS {
        debug!(
            "Ignoring {} targets beyond the first {}",
            targets.len() - MAX_TARGETS,
            MAX_TARGETS
        );
    }
    targets.into_iter().take(MAX_TARGETS).collect()
}

/// Fills in whatever wasn't passed on the command line by prompting for it.
pub fn collect_request<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<ConversionRequest> {
    let amount = match args.amount {
        Some(amount) => amount,
        None => prompt_amount(input, out)?,
    };

    let source_input = match &args.from {
        Some(from) => from.clone(),
        None => prompt(input, out, "Enter source country or currency code: ")?,
    };

    let targets_input = match &args.to {
        Some(to) => to.clone(),
        None => prompt(
            input,
            out,
            "Enter target countries/currency codes (up to 5, separated by commas): ",
        )?,
    };

    Ok(ConversionRequest {
        amount,
        currency_from: resolve_currency_code(&source_input),
        targets: parse_targets(&targets_input),
    })
}

/// Converts the request into every target and records the successes.
///
/// A failed fetch (or one that came back empty) prints a single error line and
/// skips all conversions.
pub fn report_conversions<W: Write>(
    request: &ConversionRequest,
    rates: Result<RateTable, FxError>,
    history: &mut ConversionHistory,
    out: &mut W,
) -> anyhow::Result<ConversionOutcome> {
    let rates = match rates {
        Ok(rates) if !rates.is_empty() => rates,
        Ok(_) => {
            warn!("Exchange rate service returned no rates");
            writeln!(out, "Error retrieving exchange rates. Please try again later.")?;
            return Ok(ConversionOutcome::RatesUnavailable);
        }
        Err(err) => {
            warn!("{}", err);
            writeln!(out, "Error retrieving exchange rates. Please try again later.")?;
            return Ok(ConversionOutcome::RatesUnavailable);
        }
    };

    writeln!(out, "\n{}", "--- Conversion Results ---".bold())?;
    if let Some(updated_at) = rates.updated_at() {
        writeln!(out, "Rates as of {}", updated_at.format("%Y-%m-%d %H:%M UTC"))?;
    }

    let mut succeeded = 0;
    let mut failed = 0;
    for target in &request.targets {
        let currency_to = resolve_currency_code(target);
        match convert_currency(request.amount, &request.currency_from, &currency_to, &rates) {
            Ok(converted_amount) => {
                let record = ConversionRecord::new(
                    request.amount,
                    request.currency_from.clone(),
                    converted_amount,
                    currency_to,
                );
                writeln!(out, "{}", record)?;
                history.add(record);
                succeeded += 1;
            }
            Err(err) if err.is_unsupported_currency() => {
                debug!("{}", err);
                let message =
                    format!("Conversion failed for {}. Unsupported currency.", currency_to);
                writeln!(out, "{}", message.red())?;
                failed += 1;
            }
            Err(err @ FxError::AmountOutOfRange { .. }) => {
                warn!("{}", err);
                let message = format!("Conversion failed for {}. Amount too large.", currency_to);
                writeln!(out, "{}", message.red())?;
                failed += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(ConversionOutcome::Completed { succeeded, failed })
}
