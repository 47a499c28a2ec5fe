//! Schedule output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::loan::PaymentFrequency;

/// Display format for payment dates ("Wed Jan 31 2024")
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// A single payment period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Zero-based period index
    pub iteration: u32,

    /// Balance before this period's payment
    pub opening_balance: f64,

    /// Interest accrued on the opening balance
    pub interest: f64,

    /// Portion of the payment applied to principal
    pub principal_payment: f64,

    /// Balance after the payment, never negative
    pub closing_balance: f64,

    pub payment_date: NaiveDate,
}

impl Period {
    /// Total cash paid this period. Only the final period can be smaller
    /// than the scheduled payment amount.
    pub fn payment(&self) -> f64 {
        self.interest + self.principal_payment
    }

    pub fn display_date(&self) -> String {
        self.payment_date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Complete amortization schedule for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Effective rate applied each period
    pub period_rate: f64,

    pub frequency: PaymentFrequency,

    /// Scheduled payment per period
    pub payment_amount: f64,

    /// Periods in payment order
    pub periods: Vec<Period>,
}

impl AmortizationSchedule {
    pub fn new(period_rate: f64, frequency: PaymentFrequency, payment_amount: f64, periods: Vec<Period>) -> Self {
        Self {
            period_rate,
            frequency,
            payment_amount,
            periods,
        }
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Date the loan is paid off
    pub fn payoff_date(&self) -> Option<NaiveDate> {
        self.periods.last().map(|p| p.payment_date)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_interest: f64 = self.periods.iter().map(|p| p.interest).sum();
        let total_principal: f64 = self.periods.iter().map(|p| p.principal_payment).sum();

        ScheduleSummary {
            number_of_periods: self.periods.len() as u32,
            total_interest,
            total_principal,
            total_paid: total_interest + total_principal,
            first_payment_date: self.periods.first().map(|p| p.payment_date),
            final_payment_date: self.payoff_date(),
            final_payment: self.periods.last().map(Period::payment).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub number_of_periods: u32,
    pub total_interest: f64,
    pub total_principal: f64,
    pub total_paid: f64,
    pub first_payment_date: Option<NaiveDate>,
    pub final_payment_date: Option<NaiveDate>,
    pub final_payment: f64,
}
