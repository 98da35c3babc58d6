use std::{fmt, io::Write};

use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use tabled::{settings::Style, Table, Tabled};

use super::currencies::CurrencyCode;

/// One successful conversion. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRecord {
    amount: Decimal,
    currency_from: CurrencyCode,
    converted_amount: Decimal,
    currency_to: CurrencyCode,
}

impl ConversionRecord {
    pub fn new(
        amount: Decimal,
        currency_from: CurrencyCode,
        converted_amount: Decimal,
        currency_to: CurrencyCode,
    ) -> Self {
        ConversionRecord {
            amount,
            currency_from,
            converted_amount,
            currency_to,
        }
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.2} {}",
            self.amount.normalize(),
            self.currency_from,
            self.converted_amount,
            self.currency_to
        )
    }
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "#")]
    position: usize,
    conversion: String,
}

/// Conversions made during this run, oldest first.
#[derive(Debug, Default)]
pub struct ConversionHistory {
    records: Vec<ConversionRecord>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn show<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "No conversions recorded.");
        }

        let rows: Vec<HistoryRow> = self
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| HistoryRow {
                position: i + 1,
                conversion: record.to_string(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::modern());

        writeln!(out, "\n{}", "--- Conversion History ---".bold())?;
        writeln!(out, "{}", table)
    }
}
