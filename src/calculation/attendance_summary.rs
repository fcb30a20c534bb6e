//! Attendance summarisation.
//!
//! Reduces a period's attendance records to the figures payroll needs:
//! days worked and overtime hours.

use rust_decimal::Decimal;

use crate::config::WorkSchedule;
use crate::models::Attendance;

/// Aggregate attendance figures for a pay period.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    /// Number of records with a login timestamp.
    pub days_worked: u32,
    /// Total hours across records with both timestamps.
    pub total_hours: Decimal,
    /// Hours beyond the standard day, summed per record.
    pub overtime_hours: Decimal,
}

/// Summarises attendance records for payroll.
///
/// A record counts toward `days_worked` when it has a login timestamp.
/// Overtime accrues per record as `max(0, work_hours - hours_per_day)`;
/// records missing either timestamp contribute no hours.
pub fn summarize_attendance(records: &[Attendance], schedule: &WorkSchedule) -> AttendanceSummary {
    let standard_day = Decimal::from(schedule.hours_per_day);

    let mut days_worked = 0u32;
    let mut total_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;

    for record in records {
        if !record.is_present() {
            continue;
        }
        days_worked += 1;

        if let Some(work_hours) = record.work_hours() {
            total_hours += work_hours;
            if work_hours > standard_day {
                overtime_hours += work_hours - standard_day;
            }
        }
    }

    AttendanceSummary {
        days_worked,
        total_hours,
        overtime_hours,
    }
}
