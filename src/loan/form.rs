//! Parse raw loan form fields into a typed `LoanInput`

use chrono::NaiveDate;
use serde::Deserialize;

use super::{LoanInput, PaymentFrequency};
use crate::error::InputError;

/// Date format produced by HTML date inputs
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// The five loan fields as the user typed them
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoanForm {
    pub balance: String,
    /// Annual rate in percent ("5" means 5%)
    pub rate_percent: String,
    /// Frequency name or selector code
    pub frequency: String,
    pub payment_amount: String,
    /// ISO date of the first payment
    pub first_payment_date: String,
}

impl LoanForm {
    /// Validate every field and build the loan
    pub fn parse(&self) -> Result<LoanInput, InputError> {
        let balance = parse_number("balance", &self.balance)?;
        if balance <= 0.0 {
            return Err(InputError::NonPositive { field: "balance", value: balance });
        }

        let rate_percent = parse_number("rate", &self.rate_percent)?;
        if rate_percent < 0.0 {
            return Err(InputError::NegativeRate(rate_percent));
        }

        let frequency: PaymentFrequency = self.frequency.parse()?;

        let payment_amount = parse_number("payment amount", &self.payment_amount)?;
        if payment_amount <= 0.0 {
            return Err(InputError::NonPositive { field: "payment amount", value: payment_amount });
        }

        let date_str = self.first_payment_date.trim();
        let first_payment_date = NaiveDate::parse_from_str(date_str, FORM_DATE_FORMAT)
            .map_err(|_| InputError::InvalidDate(date_str.to_string()))?;

        Ok(LoanInput::new(
            balance,
            rate_percent / 100.0,
            frequency,
            payment_amount,
            first_payment_date,
        ))
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let invalid = || InputError::InvalidNumber { field, value: raw.to_string() };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}
