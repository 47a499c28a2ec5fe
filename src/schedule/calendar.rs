//! Payment date stepping
//!
//! Weekly payments advance by whole weeks. Month-based frequencies advance by
//! whole calendar months from the first payment date, clamping the day to the
//! end of shorter months (Jan 31 -> Feb 29 -> Mar 31).

use chrono::{Days, Months, NaiveDate};

use crate::loan::PaymentFrequency;

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-12)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Add whole months, clamping the day to the target month's length
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Date of the payment at `iteration` (0 = first payment)
pub fn payment_date(first_date: NaiveDate, iteration: u32, frequency: PaymentFrequency) -> Option<NaiveDate> {
    match frequency.months_per_period() {
        None => first_date.checked_add_days(Days::new(7 * u64::from(iteration))),
        Some(months) => add_months(first_date, iteration.checked_mul(months)?),
    }
}
