//! Approved-leave overlap predicate.
//!
//! Insert/update validation for leave requests: two Approved leaves for
//! the same employee must not cover overlapping date intervals.

use chrono::NaiveDate;

use crate::models::{LeaveRequest, LeaveStatus};

/// Returns true when any existing Approved leave for the employee
/// intersects the candidate interval `[start, end]`.
///
/// `exclude_leave_id` removes one row from consideration, for validating
/// an update against the row being updated.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::has_overlapping_approved_leave;
/// use payroll_engine::models::{LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let existing = vec![LeaveRequest {
///     leave_id: 42,
///     employee_id: 10001,
///     leave_type: "Vacation".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     status: LeaveStatus::Approved,
/// }];
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert!(has_overlapping_approved_leave(&existing, 10001, start, end, None));
/// assert!(!has_overlapping_approved_leave(&existing, 10001, start, end, Some(42)));
/// ```
pub fn has_overlapping_approved_leave(
    existing: &[LeaveRequest],
    employee_id: i32,
    start: NaiveDate,
    end: NaiveDate,
    exclude_leave_id: Option<i64>,
) -> bool {
    existing
        .iter()
        .filter(|leave| leave.employee_id == employee_id)
        .filter(|leave| leave.status == LeaveStatus::Approved)
        .filter(|leave| exclude_leave_id != Some(leave.leave_id))
        .any(|leave| leave.overlaps(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn leave(
        leave_id: i64,
        employee_id: i32,
        start: &str,
        end: &str,
        status: LeaveStatus,
    ) -> LeaveRequest {
        LeaveRequest {
            leave_id,
            employee_id,
            leave_type: "Vacation".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            status,
        }
    }

    /// LO-001: candidate ending inside an approved leave overlaps
    #[test]
    fn test_overlap_when_candidate_ends_inside_existing() {
        let existing = vec![leave(1, 10001, "2025-01-14", "2025-01-20", LeaveStatus::Approved)];
        assert!(has_overlapping_approved_leave(
            &existing,
            10001,
            make_date("2025-01-10"),
            make_date("2025-01-15"),
            None,
        ));
    }

    /// LO-002: disjoint intervals do not overlap
    #[test]
    fn test_no_overlap_for_disjoint_intervals() {
        let existing = vec![leave(1, 10001, "2025-01-10", "2025-01-15", LeaveStatus::Approved)];
        assert!(!has_overlapping_approved_leave(
            &existing,
            10001,
            make_date("2025-01-01"),
            make_date("2025-01-05"),
            None,
        ));
    }

    /// LO-003: non-approved leaves are ignored
    #[test]
    fn test_pending_and_rejected_leaves_are_ignored() {
        let existing = vec![
            leave(1, 10001, "2025-01-10", "2025-01-15", LeaveStatus::Pending),
            leave(2, 10001, "2025-01-10", "2025-01-15", LeaveStatus::Rejected),
        ];
        assert!(!has_overlapping_approved_leave(
            &existing,
            10001,
            make_date("2025-01-12"),
            make_date("2025-01-13"),
            None,
        ));
    }

    /// LO-004: other employees' leaves are ignored
    #[test]
    fn test_other_employees_are_ignored() {
        let existing = vec![leave(1, 20022, "2025-01-10", "2025-01-15", LeaveStatus::Approved)];
        assert!(!has_overlapping_approved_leave(
            &existing,
            10001,
            make_date("2025-01-12"),
            make_date("2025-01-13"),
            None,
        ));
    }

    /// LO-005: the excluded row is skipped for update-in-place checks
    #[test]
    fn test_exclude_leave_id_skips_row() {
        let existing = vec![leave(42, 10001, "2025-01-10", "2025-01-15", LeaveStatus::Approved)];
        assert!(!has_overlapping_approved_leave(
            &existing,
            10001,
            make_date("2025-01-12"),
            make_date("2025-01-13"),
            Some(42),
        ));
        assert!(has_overlapping_approved_leave(
            &existing,
            10001,
            make_date("2025-01-12"),
            make_date("2025-01-13"),
            Some(7),
        ));
    }

    /// LO-006: a candidate fully covering an approved leave overlaps
    #[test]
    fn test_candidate_covering_existing_overlaps() {
        let existing = vec![leave(1, 10001, "2025-01-10", "2025-01-12", LeaveStatus::Approved)];
        assert!(has_overlapping_approved_leave(
            &existing,
            10001,
            make_date("2025-01-01"),
            make_date("2025-01-31"),
            None,
        ));
    }
}
