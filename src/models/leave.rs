//! Leave request model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; the interval counts against the employee's schedule.
    Approved,
    /// Rejected; the request has no payroll effect.
    Rejected,
}

/// A leave request covering an inclusive date interval.
///
/// Invariant: `start_date <= end_date`. Two Approved requests for the same
/// employee must not overlap; see
/// [`has_overlapping_approved_leave`](crate::calculation::has_overlapping_approved_leave).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier of the leave row.
    pub leave_id: i64,
    /// The employee the leave belongs to.
    pub employee_id: i32,
    /// Free-form leave type, e.g. "Vacation", "Sick", "Unpaid".
    pub leave_type: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval status.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Number of leave days, counting both endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{LeaveRequest, LeaveStatus};
    /// use chrono::NaiveDate;
    ///
    /// let leave = LeaveRequest {
    ///     leave_id: 1,
    ///     employee_id: 10001,
    ///     leave_type: "Vacation".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
    ///     status: LeaveStatus::Approved,
    /// };
    /// assert_eq!(leave.leave_days(), 5);
    /// ```
    pub fn leave_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// True when the leave type is "Unpaid", compared case-insensitively.
    pub fn is_unpaid(&self) -> bool {
        self.leave_type.trim().eq_ignore_ascii_case("unpaid")
    }

    /// True when this leave's interval intersects `[start, end]`.
    ///
    /// The intervals intersect when the candidate start falls inside this
    /// leave, the candidate end falls inside this leave, or the candidate
    /// fully covers it.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        (start >= self.start_date && start <= self.end_date)
            || (end >= self.start_date && end <= self.end_date)
            || (start <= self.start_date && end >= self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn leave(start: &str, end: &str, leave_type: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            leave_id: 1,
            employee_id: 10001,
            leave_type: leave_type.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            status,
        }
    }

    #[test]
    fn test_leave_days_is_inclusive() {
        let l = leave("2025-06-09", "2025-06-13", "Vacation", LeaveStatus::Approved);
        assert_eq!(l.leave_days(), 5);
    }

    #[test]
    fn test_single_day_leave_counts_one_day() {
        let l = leave("2025-06-09", "2025-06-09", "Sick", LeaveStatus::Approved);
        assert_eq!(l.leave_days(), 1);
    }

    #[test]
    fn test_is_unpaid_case_insensitive() {
        assert!(leave("2025-06-09", "2025-06-09", "Unpaid", LeaveStatus::Approved).is_unpaid());
        assert!(leave("2025-06-09", "2025-06-09", "UNPAID", LeaveStatus::Approved).is_unpaid());
        assert!(leave("2025-06-09", "2025-06-09", "unpaid", LeaveStatus::Approved).is_unpaid());
        assert!(!leave("2025-06-09", "2025-06-09", "Vacation", LeaveStatus::Approved).is_unpaid());
    }

    #[test]
    fn test_overlaps_when_candidate_end_falls_inside() {
        let existing = leave("2025-01-14", "2025-01-20", "Vacation", LeaveStatus::Approved);
        assert!(existing.overlaps(make_date("2025-01-10"), make_date("2025-01-15")));
    }

    #[test]
    fn test_no_overlap_for_disjoint_intervals() {
        let existing = leave("2025-01-10", "2025-01-15", "Vacation", LeaveStatus::Approved);
        assert!(!existing.overlaps(make_date("2025-01-01"), make_date("2025-01-05")));
    }

    #[test]
    fn test_overlaps_when_candidate_covers_existing() {
        let existing = leave("2025-01-10", "2025-01-12", "Sick", LeaveStatus::Approved);
        assert!(existing.overlaps(make_date("2025-01-01"), make_date("2025-01-31")));
    }

    #[test]
    fn test_overlaps_on_shared_endpoint() {
        let existing = leave("2025-01-10", "2025-01-15", "Vacation", LeaveStatus::Approved);
        assert!(existing.overlaps(make_date("2025-01-15"), make_date("2025-01-18")));
    }

    #[test]
    fn test_leave_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }
}
