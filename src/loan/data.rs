//! Loan data structures supplied by the caller

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{InputError, ScheduleError};
use crate::schedule::{period_rate, AmortizationSchedule, ScheduleConfig, ScheduleGenerator};

/// How often the fixed payment is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    /// Every 7 days
    Weekly,
    /// Every calendar month
    Monthly,
    /// Every 3 calendar months
    Quarterly,
    /// Every 12 calendar months
    Annually,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 4] = [
        PaymentFrequency::Weekly,
        PaymentFrequency::Monthly,
        PaymentFrequency::Quarterly,
        PaymentFrequency::Annually,
    ];

    /// Numeric selector code used by the loan form (months per period, 0 for weekly)
    pub fn code(&self) -> u32 {
        match self {
            PaymentFrequency::Weekly => 0,
            PaymentFrequency::Monthly => 1,
            PaymentFrequency::Quarterly => 3,
            PaymentFrequency::Annually => 12,
        }
    }

    /// Look up a frequency by its selector code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }

    /// Calendar months between payments, or None for day-stepped frequencies
    pub fn months_per_period(&self) -> Option<u32> {
        match self {
            PaymentFrequency::Weekly => None,
            other => Some(other.code()),
        }
    }

    /// Number of payments in a year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Annually => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::Annually => "annually",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentFrequency {
    type Err = InputError;

    /// Accepts a name (case-insensitive) or the form's numeric code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u32>() {
            return Self::from_code(code).ok_or_else(|| InputError::UnknownFrequency(s.to_string()));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "weekly" => Ok(PaymentFrequency::Weekly),
            "monthly" => Ok(PaymentFrequency::Monthly),
            "quarterly" => Ok(PaymentFrequency::Quarterly),
            "annually" | "annual" | "yearly" => Ok(PaymentFrequency::Annually),
            _ => Err(InputError::UnknownFrequency(s.to_string())),
        }
    }
}

/// A fixed-payment loan to amortize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Outstanding principal at period 0
    pub balance: f64,

    /// Nominal annual rate as a fraction (0.05 for 5%)
    pub annual_rate: f64,

    /// Payment frequency
    pub frequency: PaymentFrequency,

    /// Fixed amount paid each period
    pub payment_amount: f64,

    /// Date of the first payment
    pub first_payment_date: NaiveDate,
}

impl LoanInput {
    pub fn new(
        balance: f64,
        annual_rate: f64,
        frequency: PaymentFrequency,
        payment_amount: f64,
        first_payment_date: NaiveDate,
    ) -> Self {
        Self {
            balance,
            annual_rate,
            frequency,
            payment_amount,
            first_payment_date,
        }
    }

    /// Effective rate applied to the balance each period
    pub fn period_rate(&self) -> f64 {
        period_rate(self.annual_rate, self.frequency)
    }

    /// Interest accrued in the first period
    pub fn first_period_interest(&self) -> f64 {
        self.balance * self.period_rate()
    }

    /// Whether the payment exceeds the first period's interest.
    /// Interest only shrinks as the balance falls, so this decides feasibility.
    pub fn is_repayable(&self) -> bool {
        self.balance > 0.0 && self.payment_amount > self.first_period_interest()
    }

    /// Generate the full schedule with the default configuration
    pub fn schedule(&self) -> Result<AmortizationSchedule, ScheduleError> {
        ScheduleGenerator::new(ScheduleConfig::default()).generate(self)
    }
}
