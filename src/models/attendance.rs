//! Attendance model.
//!
//! One record per employee per day, with optional login/logout timestamps.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day's attendance record for an employee.
///
/// Either timestamp may be missing: an employee may have failed to log in
/// (absent) or to log out (incomplete record). A record with no login is
/// excluded from the worked-days count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Identifier of the employee that owns the record.
    pub employee_id: i32,
    /// Calendar day the record tracks.
    pub date: NaiveDate,
    /// Timestamp when the employee logged in, if any.
    pub log_in: Option<NaiveDateTime>,
    /// Timestamp when the employee logged out, if any.
    pub log_out: Option<NaiveDateTime>,
}

impl Attendance {
    /// Returns true when the record has a login timestamp.
    pub fn is_present(&self) -> bool {
        self.log_in.is_some()
    }

    /// Hours between login and logout, or `None` when either timestamp is
    /// missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Attendance;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = Attendance {
    ///     employee_id: 10001,
    ///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    ///     log_in: NaiveDateTime::parse_from_str("2025-06-02 08:00:00", "%Y-%m-%d %H:%M:%S").ok(),
    ///     log_out: NaiveDateTime::parse_from_str("2025-06-02 17:00:00", "%Y-%m-%d %H:%M:%S").ok(),
    /// };
    /// assert_eq!(record.work_hours(), Some(Decimal::new(90, 1))); // 9.0 hours
    /// ```
    pub fn work_hours(&self) -> Option<Decimal> {
        let log_in = self.log_in?;
        let log_out = self.log_out?;
        let worked_minutes = (log_out - log_in).num_minutes();
        Some(Decimal::new(worked_minutes, 0) / Decimal::new(60, 0))
    }
}
