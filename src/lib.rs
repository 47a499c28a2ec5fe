//! Loan Amortization - Schedule engine for fixed-payment loans
//!
//! This library provides:
//! - Conversion of an annual rate into an effective per-period rate
//! - Calendar-aware payment date stepping (weekly, or monthly with month-end clamping)
//! - Period-by-period interest/principal schedules with infeasibility detection
//! - Boundary parsing of raw form fields and chart/CSV/JSON output

pub mod error;
pub mod loan;
pub mod schedule;
pub mod report;

// Re-export commonly used types
pub use error::{InputError, ScheduleError};
pub use loan::{LoanForm, LoanInput, PaymentFrequency};
pub use schedule::{
    generate, payment_date, period_rate, AmortizationSchedule, Period, ScheduleConfig,
    ScheduleGenerator,
};
pub use report::ChartData;
