//! Unpaid-leave deduction.

use rust_decimal::Decimal;

use crate::models::LeaveRequest;

/// Deduction for approved unpaid leave: unpaid days times the daily rate.
///
/// Only leaves whose type is "Unpaid" (case-insensitive) count; the caller
/// supplies approved leaves already filtered to the pay period.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_unpaid_leave_deduction;
/// use payroll_engine::models::{LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let leave = LeaveRequest {
///     leave_id: 7,
///     employee_id: 10001,
///     leave_type: "Unpaid".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
///     status: LeaveStatus::Approved,
/// };
/// let deduction = calculate_unpaid_leave_deduction(&[leave], Decimal::from_str("1000").unwrap());
/// assert_eq!(deduction, Decimal::from_str("2000").unwrap());
/// ```
pub fn calculate_unpaid_leave_deduction(leaves: &[LeaveRequest], daily_rate: Decimal) -> Decimal {
    let unpaid_days: i64 = leaves
        .iter()
        .filter(|leave| leave.is_unpaid())
        .map(|leave| leave.leave_days())
        .sum();

    Decimal::from(unpaid_days) * daily_rate
}
