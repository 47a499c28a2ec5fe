//! Conversion of a nominal annual rate into an effective per-period rate

use crate::loan::PaymentFrequency;

/// Effective rate per payment period for the given annual rate.
///
/// Compounds so that `periods_per_year` periods reproduce the annual rate:
/// `(1 + annual_rate)^(1 / periods_per_year) - 1`. Weekly loans use 52 periods.
pub fn period_rate(annual_rate: f64, frequency: PaymentFrequency) -> f64 {
    if annual_rate == 0.0 {
        return 0.0;
    }
    let exponent = 1.0 / frequency.periods_per_year() as f64;
    (1.0 + annual_rate).powf(exponent) - 1.0
}
