//! CSV, JSON and text table output for schedules

use std::io::Write;

use serde::Serialize;

use crate::schedule::{AmortizationSchedule, Period};

/// Flat CSV row for one period
#[derive(Debug, Serialize)]
struct CsvRow {
    iteration: u32,
    payment_date: String,
    opening_balance: f64,
    interest: f64,
    principal_payment: f64,
    closing_balance: f64,
}

impl From<&Period> for CsvRow {
    fn from(p: &Period) -> Self {
        Self {
            iteration: p.iteration,
            payment_date: p.payment_date.to_string(),
            opening_balance: p.opening_balance,
            interest: p.interest,
            principal_payment: p.principal_payment,
            closing_balance: p.closing_balance,
        }
    }
}

/// Write one CSV row per period, with a header
pub fn write_csv<W: Write>(periods: &[Period], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for period in periods {
        csv_writer.serialize(CsvRow::from(period))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_json(schedule: &AmortizationSchedule) -> serde_json::Result<String> {
    serde_json::to_string_pretty(schedule)
}

/// Render an aligned text table, showing at most `limit` rows
pub fn render_table(periods: &[Period], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(periods.len()).min(periods.len());
    let mut out = String::new();

    out.push_str(&format!(
        "{:>6} {:>16} {:>14} {:>12} {:>12} {:>14}\n",
        "Period", "Date", "Opening", "Interest", "Principal", "Closing"
    ));
    out.push_str(&"-".repeat(79));
    out.push('\n');

    for p in &periods[..shown] {
        out.push_str(&format!(
            "{:>6} {:>16} {:>14.2} {:>12.2} {:>12.2} {:>14.2}\n",
            p.iteration + 1,
            p.display_date(),
            p.opening_balance,
            p.interest,
            p.principal_payment,
            p.closing_balance,
        ));
    }

    if periods.len() > shown {
        out.push_str(&format!("... ({} more periods)\n", periods.len() - shown));
    }

    out
}
