//! Late and undertime deductions.
//!
//! Both accrue per attendance record at the hourly rate: lateness is
//! measured from the scheduled login once past the grace threshold, and
//! undertime from the scheduled logout.

use rust_decimal::Decimal;

use crate::config::WorkSchedule;
use crate::models::Attendance;

/// Accrues the late deduction over a period's attendance records.
///
/// A record accrues when its login falls strictly after the late
/// threshold; the charged minutes run from the scheduled login time, not
/// from the threshold.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_late_deduction;
/// use payroll_engine::config::WorkSchedule;
/// use payroll_engine::models::Attendance;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = Attendance {
///     employee_id: 10001,
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     log_in: NaiveDateTime::parse_from_str("2025-06-02 08:20:00", "%Y-%m-%d %H:%M:%S").ok(),
///     log_out: NaiveDateTime::parse_from_str("2025-06-02 17:00:00", "%Y-%m-%d %H:%M:%S").ok(),
/// };
/// let hourly_rate = Decimal::from_str("125").unwrap();
/// let deduction = calculate_late_deduction(&[record], hourly_rate, &WorkSchedule::default());
/// // 20 minutes late: (20 / 60) * 125
/// assert_eq!(deduction, Decimal::from(20) / Decimal::from(60) * hourly_rate);
/// ```
pub fn calculate_late_deduction(
    records: &[Attendance],
    hourly_rate: Decimal,
    schedule: &WorkSchedule,
) -> Decimal {
    let mut total = Decimal::ZERO;

    for record in records {
        if let Some(log_in) = record.log_in {
            let login_time = log_in.time();
            if login_time > schedule.late_threshold {
                let minutes_late = (login_time - schedule.standard_login).num_minutes();
                total += Decimal::new(minutes_late, 0) / Decimal::new(60, 0) * hourly_rate;
            }
        }
    }

    total
}

/// Accrues the undertime deduction over a period's attendance records.
///
/// A record accrues when its logout falls before the scheduled logout
/// time, charged for the minutes short.
pub fn calculate_undertime_deduction(
    records: &[Attendance],
    hourly_rate: Decimal,
    schedule: &WorkSchedule,
) -> Decimal {
    let mut total = Decimal::ZERO;

    for record in records {
        if let Some(log_out) = record.log_out {
            let logout_time = log_out.time();
            if logout_time < schedule.standard_logout {
                let minutes_short = (schedule.standard_logout - logout_time).num_minutes();
                total += Decimal::new(minutes_short, 0) / Decimal::new(60, 0) * hourly_rate;
            }
        }
    }

    total
}
