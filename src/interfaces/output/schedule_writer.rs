use crate::domain::loan::InstallmentEntry;
use crate::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::Write;

const CURRENCY_SYMBOL: &str = "Rp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One sentence per loan year.
    #[default]
    Text,
    /// A JSON array with one object per loan year.
    Json,
}

#[derive(Serialize)]
struct ScheduleRow {
    year: usize,
    monthly_installment: Decimal,
    interest_rate: Decimal,
}

/// Writes an installment schedule to any `Write` sink.
pub struct ScheduleWriter<W: Write> {
    writer: W,
}

impl<W: Write> ScheduleWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_schedule(&mut self, schedule: &[InstallmentEntry], format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(schedule),
            OutputFormat::Json => self.write_json(schedule),
        }
    }

    fn write_text(&mut self, schedule: &[InstallmentEntry]) -> Result<()> {
        for (index, entry) in schedule.iter().enumerate() {
            writeln!(
                self.writer,
                "\n{} year with Monthly installment: {} {}, Interest rate: {}%",
                ordinal(index + 1),
                CURRENCY_SYMBOL,
                format_currency(entry.monthly_amount),
                format_rate(entry.annual_rate),
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_json(&mut self, schedule: &[InstallmentEntry]) -> Result<()> {
        let rows: Vec<ScheduleRow> = schedule
            .iter()
            .enumerate()
            .map(|(index, entry)| ScheduleRow {
                year: index + 1,
                monthly_installment: round_half_up(entry.monthly_amount, 2),
                interest_rate: round_half_up(entry.annual_rate, 1),
            })
            .collect();
        serde_json::to_writer_pretty(&mut self.writer, &rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// `1st`, `2nd`, `3rd`, `4th`, ... with `11th`-`13th` as exceptions.
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Two decimal places with comma thousands separators, e.g. `2,641,423.50`.
pub fn format_currency(amount: Decimal) -> String {
    let plain = format!("{:.2}", round_half_up(amount, 2).abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

pub fn format_rate(rate: Decimal) -> String {
    format!("{:.1}", round_half_up(rate, 1))
}

/// Rounds half-up and pins the scale, so `8` becomes `8.0` at one place.
fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}
