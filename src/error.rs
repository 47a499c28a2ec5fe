//! Error types for schedule generation and input parsing

use thiserror::Error;

/// Failure while generating an amortization schedule
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The fixed payment does not exceed the interest accrued in a period,
    /// so the balance never goes down
    #[error(
        "loan will never be repaid: payment of {payment_amount:.2} does not exceed \
         interest of {interest:.2} in period {iteration}"
    )]
    LoanNeverRepaid {
        /// Zero-based period in which the shortfall was detected
        iteration: u32,
        /// The fixed periodic payment
        payment_amount: f64,
        /// Interest accrued in that period
        interest: f64,
    },

    /// Starting balance was zero, negative or not a number
    #[error("balance must be positive, got {0}")]
    NonPositiveBalance(f64),

    /// Payment amount was zero, negative or not a number
    #[error("payment amount must be positive, got {0}")]
    NonPositivePayment(f64),

    /// Period rate was not a number, infinite, or at or below -100%
    #[error("period rate must be finite and greater than -1, got {0}")]
    InvalidRate(f64),

    /// The loan was not repaid within the configured number of periods
    #[error("loan not repaid within {0} periods")]
    PeriodLimitExceeded(u32),

    /// Date arithmetic left the representable calendar range
    #[error("payment date for period {iteration} is out of range")]
    DateOutOfRange {
        /// Zero-based period whose date could not be computed
        iteration: u32,
    },
}

impl ScheduleError {
    /// Text suitable for showing next to the loan form
    pub fn user_message(&self) -> &'static str {
        match self {
            ScheduleError::LoanNeverRepaid { .. } | ScheduleError::PeriodLimitExceeded(_) => {
                "payment too small to amortize this loan at this rate"
            }
            ScheduleError::NonPositiveBalance(_) => "balance must be greater than zero",
            ScheduleError::NonPositivePayment(_) => "payment amount must be greater than zero",
            ScheduleError::InvalidRate(_) => "interest rate is not a valid number",
            ScheduleError::DateOutOfRange { .. } => "payment dates run past the supported calendar range",
        }
    }
}

/// Failure while turning raw form strings into a `LoanInput`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field}: '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("interest rate cannot be negative, got {0}%")]
    NegativeRate(f64),

    #[error("unknown payment frequency '{0}'")]
    UnknownFrequency(String),

    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
