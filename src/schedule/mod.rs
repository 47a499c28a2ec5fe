//! Amortization engine: rate conversion, date stepping and schedule generation

pub mod calendar;
mod generator;
mod period;
mod rate;

pub use calendar::{add_months, days_in_month, is_leap_year, payment_date};
pub use generator::{generate, ScheduleConfig, ScheduleGenerator, DEFAULT_MAX_PERIODS};
pub use period::{AmortizationSchedule, Period, ScheduleSummary, DISPLAY_DATE_FORMAT};
pub use rate::period_rate;
