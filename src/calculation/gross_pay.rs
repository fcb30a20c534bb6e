//! Gross pay calculation.
//!
//! Derives the daily and hourly rates from the monthly salary and computes
//! basic pay for days worked plus premium pay for overtime hours.

use rust_decimal::Decimal;

use crate::config::WorkSchedule;

/// The result of a gross pay calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct GrossPayResult {
    /// Monthly rate divided by the working-days-per-month convention.
    pub daily_rate: Decimal,
    /// Daily rate divided by the standard hours per day.
    pub hourly_rate: Decimal,
    /// Pay for the days worked at the daily rate.
    pub basic_pay: Decimal,
    /// Premium pay for the overtime hours.
    pub overtime_pay: Decimal,
}

impl GrossPayResult {
    /// Basic pay plus overtime pay.
    pub fn gross_pay(&self) -> Decimal {
        self.basic_pay + self.overtime_pay
    }
}

/// Computes gross pay for a period.
///
/// * `daily_rate = monthly_rate / working_days_per_month`
/// * `basic_pay = daily_rate * days_worked`
/// * `overtime_pay = (daily_rate / hours_per_day) * overtime_hours * multiplier`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::config::WorkSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_gross_pay(
///     Decimal::from_str("22000").unwrap(),
///     10,
///     Decimal::from_str("4").unwrap(),
///     &WorkSchedule::default(),
/// );
/// assert_eq!(result.daily_rate, Decimal::from_str("1000").unwrap());
/// assert_eq!(result.gross_pay(), Decimal::from_str("10625").unwrap());
/// ```
pub fn calculate_gross_pay(
    monthly_rate: Decimal,
    days_worked: u32,
    overtime_hours: Decimal,
    schedule: &WorkSchedule,
) -> GrossPayResult {
    let daily_rate = monthly_rate / Decimal::from(schedule.working_days_per_month);
    let hourly_rate = daily_rate / Decimal::from(schedule.hours_per_day);
    let basic_pay = daily_rate * Decimal::from(days_worked);
    let overtime_pay = hourly_rate * overtime_hours * schedule.overtime_multiplier;

    GrossPayResult {
        daily_rate,
        hourly_rate,
        basic_pay,
        overtime_pay,
    }
}
