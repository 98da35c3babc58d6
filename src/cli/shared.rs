use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::bail;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AmountError {
    #[error("Please enter a valid numeric amount.")]
    NotNumeric,
    #[error("Please enter a positive number.")]
    NotPositive,
    #[error("Amount too large, please enter a smaller number.")]
    TooLarge,
}

/// Accepts plain ("12.5") and scientific ("1e3") notation; the amount must be
/// greater than zero and fit in a `Decimal`.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| out_of_range_or_not_numeric(trimmed))?;

    if amount <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }
    Ok(amount)
}

fn out_of_range_or_not_numeric(input: &str) -> AmountError {
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => AmountError::TooLarge,
        Ok(value) if value.is_finite() => AmountError::NotPositive,
        _ => AmountError::NotNumeric,
    }
}

/// Prints `message` and reads one line, without its line ending.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> anyhow::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed while waiting for: {}", message.trim());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn prompt_amount<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<Decimal> {
    loop {
        let answer = prompt(input, out, "Enter amount to convert: ")?;
        match parse_amount(&answer) {
            Ok(amount) => return Ok(amount),
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
}

pub fn confirm_action<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> anyhow::Result<bool> {
    let answer = prompt(input, out, &format!("{} (yes/no): ", question))?;
    Ok(answer.trim().to_lowercase().starts_with('y'))
}
