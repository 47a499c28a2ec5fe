//! Core schedule generator for fixed-payment loans

use chrono::NaiveDate;
use log::{debug, trace, warn};

use super::calendar::payment_date;
use super::period::{AmortizationSchedule, Period};
use super::rate::period_rate;
use crate::error::ScheduleError;
use crate::loan::{LoanInput, PaymentFrequency};

/// Default cap on the number of periods a schedule may contain
pub const DEFAULT_MAX_PERIODS: u32 = 100_000;

/// Configuration for schedule generation
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Give up if the loan is not repaid within this many periods.
    /// Catches payments that exceed interest by a vanishing margin.
    pub max_periods: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_periods: DEFAULT_MAX_PERIODS,
        }
    }
}

/// Schedule generator
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: ScheduleConfig,
}

impl ScheduleGenerator {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Build the full schedule for a loan
    pub fn generate(&self, loan: &LoanInput) -> Result<AmortizationSchedule, ScheduleError> {
        let rate = period_rate(loan.annual_rate, loan.frequency);
        debug!(
            "Period rate {:.10} for {} payments at {:.4}% annual",
            rate,
            loan.frequency,
            loan.annual_rate * 100.0
        );

        let periods = generate_periods(
            loan.balance,
            rate,
            loan.payment_amount,
            loan.frequency,
            loan.first_payment_date,
            self.config.max_periods,
        )?;
        debug!("Loan repaid in {} periods", periods.len());

        Ok(AmortizationSchedule::new(rate, loan.frequency, loan.payment_amount, periods))
    }
}

/// Generate periods until the balance reaches zero, using the default period cap
pub fn generate(
    balance: f64,
    period_rate: f64,
    payment_amount: f64,
    frequency: PaymentFrequency,
    first_date: NaiveDate,
) -> Result<Vec<Period>, ScheduleError> {
    generate_periods(balance, period_rate, payment_amount, frequency, first_date, DEFAULT_MAX_PERIODS)
}

fn generate_periods(
    mut balance: f64,
    period_rate: f64,
    payment_amount: f64,
    frequency: PaymentFrequency,
    first_date: NaiveDate,
    max_periods: u32,
) -> Result<Vec<Period>, ScheduleError> {
    // Negated comparisons so NaN is rejected too
    if !(balance > 0.0) || !balance.is_finite() {
        return Err(ScheduleError::NonPositiveBalance(balance));
    }
    if !(payment_amount > 0.0) {
        return Err(ScheduleError::NonPositivePayment(payment_amount));
    }
    // f64::min discards NaN, so a NaN rate would pass the principal check below
    if !period_rate.is_finite() || period_rate <= -1.0 {
        return Err(ScheduleError::InvalidRate(period_rate));
    }

    let mut periods = Vec::new();
    let mut iteration: u32 = 0;

    while balance > 0.0 {
        if iteration >= max_periods {
            warn!("Loan not repaid after {} periods", max_periods);
            return Err(ScheduleError::PeriodLimitExceeded(max_periods));
        }

        let interest = balance * period_rate;
        // Cap at the remaining balance so the final period lands on zero
        let principal_payment = (payment_amount - interest).min(balance);

        let never_repaid = ScheduleError::LoanNeverRepaid {
            iteration,
            payment_amount,
            interest,
        };
        if !(principal_payment > 0.0) {
            warn!("{}", never_repaid);
            return Err(never_repaid);
        }

        let closing_balance = (balance - principal_payment).max(0.0);
        if closing_balance >= balance {
            // Principal is below the balance's floating point resolution
            warn!("{}", never_repaid);
            return Err(never_repaid);
        }

        let payment_date =
            payment_date(first_date, iteration, frequency).ok_or(ScheduleError::DateOutOfRange { iteration })?;

        trace!(
            "Period {} ({}): opening {:.2}, interest {:.2}, principal {:.2}, closing {:.2}",
            iteration,
            payment_date,
            balance,
            interest,
            principal_payment,
            closing_balance
        );

        periods.push(Period {
            iteration,
            opening_balance: balance,
            interest,
            principal_payment,
            closing_balance,
            payment_date,
        });

        balance = closing_balance;
        iteration += 1;
    }

    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn car_loan() -> LoanInput {
        LoanInput::new(10_000.0, 0.05, PaymentFrequency::Monthly, 500.0, date(2024, 1, 31))
    }

    #[test]
    fn test_zero_rate_loan() {
        let loan = LoanInput::new(1200.0, 0.0, PaymentFrequency::Monthly, 100.0, date(2024, 1, 15));
        let schedule = loan.schedule().unwrap();

        assert_eq!(schedule.periods.len(), 12);
        for (i, p) in schedule.periods.iter().enumerate() {
            assert_eq!(p.iteration, i as u32);
            assert_eq!(p.interest, 0.0);
            assert_eq!(p.principal_payment, 100.0);
        }
        assert_eq!(schedule.periods[11].closing_balance, 0.0);
        assert_eq!(schedule.periods[11].payment_date, date(2024, 12, 15));
    }

    #[test]
    fn test_final_balance_is_exactly_zero() {
        let schedule = car_loan().schedule().unwrap();
        let last = schedule.periods.last().unwrap();

        assert_eq!(last.closing_balance, 0.0);
        assert!(last.principal_payment <= 500.0);
        assert!(schedule.periods[..schedule.len() - 1].iter().all(|p| p.closing_balance > 0.0));
    }

    #[test]
    fn test_interest_follows_prior_balance() {
        let loan = car_loan();
        let schedule = loan.schedule().unwrap();
        let rate = schedule.period_rate;

        assert_relative_eq!(schedule.periods[0].interest, loan.balance * rate);
        for pair in schedule.periods.windows(2) {
            assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
            assert_relative_eq!(pair[1].interest, pair[0].closing_balance * rate);
        }
    }

    #[test]
    fn test_balance_strictly_decreasing() {
        let schedule = car_loan().schedule().unwrap();
        for pair in schedule.periods.windows(2) {
            assert!(pair[1].closing_balance < pair[0].closing_balance);
        }
        for p in &schedule.periods {
            assert!(p.principal_payment > 0.0);
            assert_relative_eq!(p.closing_balance, p.opening_balance - p.principal_payment, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_regular_payments_match_amount() {
        let schedule = car_loan().schedule().unwrap();
        let (last, rest) = schedule.periods.split_last().unwrap();
        for p in rest {
            assert_relative_eq!(p.payment(), 500.0, epsilon = 1e-9);
        }
        assert!(last.payment() <= 500.0 + 1e-9);
    }

    #[test]
    fn test_summary_reconciles() {
        let loan = car_loan();
        let summary = loan.schedule().unwrap().summary();

        assert_relative_eq!(summary.total_principal, loan.balance, epsilon = 1e-6);
        assert!(summary.total_interest > 0.0);
        assert_relative_eq!(summary.total_paid, summary.total_principal + summary.total_interest);
        assert_eq!(summary.first_payment_date, Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_monthly_dates_clamp() {
        let schedule = car_loan().schedule().unwrap();
        assert_eq!(schedule.periods[0].payment_date, date(2024, 1, 31));
        assert_eq!(schedule.periods[1].payment_date, date(2024, 2, 29));
        assert_eq!(schedule.periods[2].payment_date, date(2024, 3, 31));
    }

    #[test]
    fn test_weekly_loan() {
        let loan = LoanInput::new(2_000.0, 0.10, PaymentFrequency::Weekly, 100.0, date(2024, 1, 1));
        let schedule = loan.schedule().unwrap();

        assert!(schedule.len() > 20);
        assert_eq!(schedule.periods[4].payment_date, date(2024, 1, 29));
        assert_eq!(schedule.periods.last().unwrap().closing_balance, 0.0);
    }

    #[test]
    fn test_infeasible_loan() {
        let loan = LoanInput::new(100_000.0, 0.20, PaymentFrequency::Monthly, 100.0, date(2024, 1, 1));
        match loan.schedule() {
            Err(ScheduleError::LoanNeverRepaid { iteration, payment_amount, interest }) => {
                assert_eq!(iteration, 0);
                assert_eq!(payment_amount, 100.0);
                assert!(interest > 1500.0);
            }
            other => panic!("expected LoanNeverRepaid, got {:?}", other),
        }
    }

    #[test]
    fn test_payment_equal_to_interest_is_rejected() {
        // 50% annual, paid annually: interest on 1000 is exactly 500
        let loan = LoanInput::new(1_000.0, 0.5, PaymentFrequency::Annually, 500.0, date(2024, 6, 1));
        assert!(matches!(
            loan.schedule(),
            Err(ScheduleError::LoanNeverRepaid { iteration: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        let first = date(2024, 1, 1);
        assert_eq!(
            generate(0.0, 0.01, 100.0, PaymentFrequency::Monthly, first),
            Err(ScheduleError::NonPositiveBalance(0.0))
        );
        assert_eq!(
            generate(-50.0, 0.01, 100.0, PaymentFrequency::Monthly, first),
            Err(ScheduleError::NonPositiveBalance(-50.0))
        );
        assert_eq!(
            generate(1000.0, 0.0, 0.0, PaymentFrequency::Monthly, first),
            Err(ScheduleError::NonPositivePayment(0.0))
        );
        assert!(matches!(
            generate(f64::NAN, 0.0, 10.0, PaymentFrequency::Monthly, first),
            Err(ScheduleError::NonPositiveBalance(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_rate() {
        let first = date(2024, 1, 1);
        assert!(matches!(
            generate(1000.0, f64::NAN, 100.0, PaymentFrequency::Monthly, first),
            Err(ScheduleError::InvalidRate(r)) if r.is_nan()
        ));
        assert_eq!(
            generate(1000.0, f64::INFINITY, 100.0, PaymentFrequency::Monthly, first),
            Err(ScheduleError::InvalidRate(f64::INFINITY))
        );
        assert_eq!(
            generate(1000.0, -1.0, 100.0, PaymentFrequency::Monthly, first),
            Err(ScheduleError::InvalidRate(-1.0))
        );

        let nan_loan = LoanInput::new(100_000.0, f64::NAN, PaymentFrequency::Monthly, 100.0, first);
        assert!(matches!(nan_loan.schedule(), Err(ScheduleError::InvalidRate(_))));

        // Below -100% annual the compounding base is negative and the rate is NaN
        let negative = LoanInput::new(1000.0, -1.5, PaymentFrequency::Monthly, 100.0, first);
        assert!(matches!(negative.schedule(), Err(ScheduleError::InvalidRate(_))));
    }

    #[test]
    fn test_stalled_balance_is_never_repaid() {
        // 1e17 - 1.0 rounds back to 1e17, so the balance never moves
        let result = generate(1e17, 0.0, 1.0, PaymentFrequency::Monthly, date(2024, 1, 1));
        match result {
            Err(ScheduleError::LoanNeverRepaid { iteration, payment_amount, interest }) => {
                assert_eq!(iteration, 0);
                assert_eq!(payment_amount, 1.0);
                assert_eq!(interest, 0.0);
            }
            other => panic!("expected LoanNeverRepaid, got {:?}", other),
        }
    }

    #[test]
    fn test_period_limit() {
        let generator = ScheduleGenerator::new(ScheduleConfig { max_periods: 5 });
        let loan = LoanInput::new(1200.0, 0.0, PaymentFrequency::Monthly, 100.0, date(2024, 1, 1));
        assert_eq!(generator.generate(&loan), Err(ScheduleError::PeriodLimitExceeded(5)));

        let roomy = ScheduleGenerator::new(ScheduleConfig { max_periods: 12 });
        assert_eq!(roomy.generate(&loan).unwrap().len(), 12);
    }

    #[test]
    fn test_date_out_of_range() {
        let result = generate(1000.0, 0.0, 100.0, PaymentFrequency::Annually, NaiveDate::MAX);
        assert_eq!(result, Err(ScheduleError::DateOutOfRange { iteration: 1 }));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let loan = car_loan();
        let first = loan.schedule().unwrap();
        let second = loan.schedule().unwrap();
        assert_eq!(first, second);

        let rate = loan.period_rate();
        let a = generate(loan.balance, rate, loan.payment_amount, loan.frequency, loan.first_payment_date).unwrap();
        assert_eq!(a, first.periods);
    }
}
