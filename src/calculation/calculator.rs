//! The payroll calculator.
//!
//! Orchestrates one payroll computation: validates the request, loads the
//! employee/attendance/leave snapshots through the repository, and runs
//! the calculation steps over them. Each computation is a synchronous
//! sequence of reads followed by pure arithmetic; concurrent computations
//! share nothing but the repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::WorkSchedule;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayPeriod, Payroll};
use crate::repository::PayrollRepository;

use super::{
    calculate_gross_pay, calculate_late_deduction, calculate_undertime_deduction,
    calculate_unpaid_leave_deduction, scheme_for, summarize_attendance,
};

/// Computes payroll results against a repository.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::models::{Employee, EmployeeType};
/// use payroll_engine::repository::InMemoryRepository;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let repository = InMemoryRepository::new().with_employee(
///     Employee::with_default_allowances(
///         10001,
///         "Manuel",
///         "Garcia",
///         "Payroll Manager",
///         "Accounting",
///         EmployeeType::Regular,
///         Decimal::from(22000),
///     ),
/// );
/// let calculator = PayrollCalculator::new(repository);
///
/// let payroll = calculator.compute_payroll(
///     10001,
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// )?;
/// assert_eq!(payroll.days_worked, 0);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollCalculator<R> {
    repository: R,
    schedule: WorkSchedule,
}

impl<R: PayrollRepository> PayrollCalculator<R> {
    /// Creates a calculator with the standard work schedule.
    pub fn new(repository: R) -> Self {
        Self::with_schedule(repository, WorkSchedule::default())
    }

    /// Creates a calculator with an explicit work schedule.
    pub fn with_schedule(repository: R, schedule: WorkSchedule) -> Self {
        Self {
            repository,
            schedule,
        }
    }

    /// Computes the payroll for one employee over one pay period.
    ///
    /// Input validation happens before any data access: the employee ID
    /// must be positive and the period must not be inverted. Any
    /// repository failure aborts the computation, except the approved-
    /// leaves lookup, which degrades to a zero unpaid-leave deduction.
    ///
    /// # Errors
    ///
    /// * [`PayrollError::InvalidEmployeeId`] / [`PayrollError::InvalidPeriod`]
    ///   for rejected inputs.
    /// * [`PayrollError::EmployeeNotFound`] when no employee record exists.
    /// * [`PayrollError::Calculation`] wrapping any other data-access
    ///   failure; no partial result is returned.
    pub fn compute_payroll(
        &self,
        employee_id: i32,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> PayrollResult<Payroll> {
        validate_inputs(employee_id, period_start, period_end)?;

        info!(employee_id, %period_start, %period_end, "Computing payroll");

        let employee = self
            .repository
            .load_employee(employee_id)
            .map_err(|source| PayrollError::Calculation {
                employee_id,
                source,
            })?
            .ok_or(PayrollError::EmployeeNotFound { employee_id })?;

        let attendance = self
            .repository
            .load_attendance(employee_id, period_start, period_end)
            .map_err(|source| PayrollError::Calculation {
                employee_id,
                source,
            })?;

        let summary = summarize_attendance(&attendance, &self.schedule);
        let gross = calculate_gross_pay(
            employee.basic_salary,
            summary.days_worked,
            summary.overtime_hours,
            &self.schedule,
        );

        let late_deduction = calculate_late_deduction(&attendance, gross.hourly_rate, &self.schedule);
        let undertime_deduction =
            calculate_undertime_deduction(&attendance, gross.hourly_rate, &self.schedule);
        let unpaid_leave_deduction =
            self.unpaid_leave_deduction(employee_id, period_start, period_end, gross.daily_rate);

        let statutory = scheme_for(employee.employee_type).deductions(employee.basic_salary);
        let total_allowances = employee.total_allowances();
        let total_deductions =
            statutory.total() + late_deduction + undertime_deduction + unpaid_leave_deduction;
        let net_pay = gross.basic_pay + gross.overtime_pay + total_allowances - total_deductions;

        let payroll = Payroll {
            employee_id,
            period: PayPeriod {
                start_date: period_start,
                end_date: period_end,
            },
            monthly_rate: employee.basic_salary,
            daily_rate: gross.daily_rate,
            days_worked: summary.days_worked,
            overtime_hours: summary.overtime_hours,
            gross_earnings: gross.basic_pay,
            overtime_pay: gross.overtime_pay,
            rice_subsidy: employee.rice_subsidy,
            phone_allowance: employee.phone_allowance,
            clothing_allowance: employee.clothing_allowance,
            sss: statutory.sss,
            philhealth: statutory.philhealth,
            pagibig: statutory.pagibig,
            withholding_tax: statutory.withholding_tax,
            late_deduction,
            undertime_deduction,
            unpaid_leave_deduction,
            total_deductions,
            net_pay,
        };

        info!(
            employee_id,
            days_worked = payroll.days_worked,
            total_hours = %summary.total_hours,
            overtime_hours = %payroll.overtime_hours,
            net_pay = %payroll.net_pay,
            "Payroll computed"
        );

        Ok(payroll)
    }

    /// Checks whether an Approved leave already covers part of
    /// `[start, end]` for the employee.
    ///
    /// `exclude_leave_id` skips one row, for validating an update against
    /// the row being updated.
    pub fn has_overlapping_approved_leave(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
        exclude_leave_id: Option<i64>,
    ) -> PayrollResult<bool> {
        validate_inputs(employee_id, start, end)?;

        let leaves = self
            .repository
            .load_approved_leaves(employee_id, start, end)
            .map_err(|source| PayrollError::Calculation {
                employee_id,
                source,
            })?;

        Ok(super::has_overlapping_approved_leave(
            &leaves,
            employee_id,
            start,
            end,
            exclude_leave_id,
        ))
    }

    fn unpaid_leave_deduction(
        &self,
        employee_id: i32,
        period_start: NaiveDate,
        period_end: NaiveDate,
        daily_rate: Decimal,
    ) -> Decimal {
        match self
            .repository
            .load_approved_leaves(employee_id, period_start, period_end)
        {
            Ok(leaves) => calculate_unpaid_leave_deduction(&leaves, daily_rate),
            Err(error) => {
                warn!(
                    employee_id,
                    %error,
                    "Failed to load approved leaves; skipping unpaid leave deduction"
                );
                Decimal::ZERO
            }
        }
    }
}

fn validate_inputs(
    employee_id: i32,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> PayrollResult<()> {
    if employee_id <= 0 {
        return Err(PayrollError::InvalidEmployeeId { employee_id });
    }
    if period_end < period_start {
        return Err(PayrollError::InvalidPeriod {
            start: period_start,
            end: period_end,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attendance, Employee, EmployeeType, LeaveRequest, LeaveStatus};
    use crate::repository::{InMemoryRepository, RepositoryError};
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn test_employee() -> Employee {
        Employee::with_default_allowances(
            10001,
            "Manuel",
            "Garcia",
            "Payroll Manager",
            "Accounting",
            EmployeeType::Regular,
            dec("22000"),
        )
    }

    fn attendance(date: &str, log_in: Option<&str>, log_out: Option<&str>) -> Attendance {
        Attendance {
            employee_id: 10001,
            date: make_date(date),
            log_in: log_in.map(|t| make_datetime(date, t)),
            log_out: log_out.map(|t| make_datetime(date, t)),
        }
    }

    fn unpaid_leave(leave_id: i64, start: &str, end: &str) -> LeaveRequest {
        LeaveRequest {
            leave_id,
            employee_id: 10001,
            leave_type: "Unpaid".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            status: LeaveStatus::Approved,
        }
    }

    /// A repository that fails every query.
    struct FailingRepository;

    impl PayrollRepository for FailingRepository {
        fn load_employee(&self, _: i32) -> Result<Option<Employee>, RepositoryError> {
            Err(RepositoryError::Backend {
                message: "connection reset".to_string(),
            })
        }

        fn load_attendance(
            &self,
            _: i32,
            _: NaiveDate,
            _: NaiveDate,
        ) -> Result<Vec<Attendance>, RepositoryError> {
            Err(RepositoryError::Backend {
                message: "connection reset".to_string(),
            })
        }

        fn load_approved_leaves(
            &self,
            _: i32,
            _: NaiveDate,
            _: NaiveDate,
        ) -> Result<Vec<LeaveRequest>, RepositoryError> {
            Err(RepositoryError::Backend {
                message: "connection reset".to_string(),
            })
        }
    }

    /// A repository where only the leave lookup fails.
    struct LeaveFailingRepository(InMemoryRepository);

    impl PayrollRepository for LeaveFailingRepository {
        fn load_employee(&self, employee_id: i32) -> Result<Option<Employee>, RepositoryError> {
            self.0.load_employee(employee_id)
        }

        fn load_attendance(
            &self,
            employee_id: i32,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<Attendance>, RepositoryError> {
            self.0.load_attendance(employee_id, start, end)
        }

        fn load_approved_leaves(
            &self,
            _: i32,
            _: NaiveDate,
            _: NaiveDate,
        ) -> Result<Vec<LeaveRequest>, RepositoryError> {
            Err(RepositoryError::Backend {
                message: "leave view unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_rejects_non_positive_employee_id_before_data_access() {
        // The failing repository proves validation runs first
        let calculator = PayrollCalculator::new(FailingRepository);
        let result =
            calculator.compute_payroll(0, make_date("2025-06-01"), make_date("2025-06-30"));

        match result.unwrap_err() {
            PayrollError::InvalidEmployeeId { employee_id } => assert_eq!(employee_id, 0),
            other => panic!("Expected InvalidEmployeeId, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_inverted_period() {
        let calculator = PayrollCalculator::new(FailingRepository);
        let result =
            calculator.compute_payroll(10001, make_date("2025-06-30"), make_date("2025-06-01"));

        match result.unwrap_err() {
            PayrollError::InvalidPeriod { start, end } => {
                assert_eq!(start, make_date("2025-06-30"));
                assert_eq!(end, make_date("2025-06-01"));
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let repository = InMemoryRepository::new().with_employee(test_employee());
        let calculator = PayrollCalculator::new(repository);
        let result =
            calculator.compute_payroll(10001, make_date("2025-06-02"), make_date("2025-06-02"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_employee_is_not_found() {
        let calculator = PayrollCalculator::new(InMemoryRepository::new());
        let result =
            calculator.compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"));

        match result.unwrap_err() {
            PayrollError::EmployeeNotFound { employee_id } => assert_eq!(employee_id, 10001),
            other => panic!("Expected EmployeeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_data_access_failure_aborts_computation() {
        let calculator = PayrollCalculator::new(FailingRepository);
        let result =
            calculator.compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"));

        match result.unwrap_err() {
            PayrollError::Calculation { employee_id, .. } => assert_eq!(employee_id, 10001),
            other => panic!("Expected Calculation, got {:?}", other),
        }
    }

    /// PC-001: full scenario with overtime, undertime, and unpaid leave
    #[test]
    fn test_full_payroll_scenario() {
        let repository = InMemoryRepository::new()
            .with_employee(test_employee())
            .with_attendance(vec![
                attendance("2025-06-02", Some("08:00:00"), Some("17:00:00")), // 9h, OT 1
                attendance("2025-06-03", Some("08:00:00"), Some("18:00:00")), // 10h, OT 2
                attendance("2025-06-04", Some("08:00:00"), Some("16:00:00")), // 8h, undertime 1h
            ])
            .with_leaves(vec![unpaid_leave(1, "2025-06-09", "2025-06-10")]);

        let calculator = PayrollCalculator::new(repository);
        let payroll = calculator
            .compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"))
            .unwrap();

        assert_eq!(payroll.monthly_rate, dec("22000"));
        assert_eq!(payroll.daily_rate, dec("1000"));
        assert_eq!(payroll.days_worked, 3);
        assert_eq!(payroll.overtime_hours, dec("3"));
        assert_eq!(payroll.gross_earnings, dec("3000"));
        assert_eq!(payroll.overtime_pay, dec("468.75")); // 125 * 3 * 1.25
        assert_eq!(payroll.late_deduction, Decimal::ZERO);
        assert_eq!(payroll.undertime_deduction, dec("125"));
        assert_eq!(payroll.unpaid_leave_deduction, dec("2000"));
        assert_eq!(payroll.sss, dec("990"));
        assert_eq!(payroll.philhealth, dec("550"));
        assert_eq!(payroll.pagibig, dec("100"));
        assert_eq!(payroll.withholding_tax, dec("175"));
        assert_eq!(payroll.total_deductions, dec("3940"));
        assert_eq!(payroll.net_pay, dec("4028.75"));
    }

    /// PC-002: zero attendance still applies statutory deductions
    #[test]
    fn test_zero_attendance_still_deducts_statutory() {
        let repository = InMemoryRepository::new().with_employee(test_employee());
        let calculator = PayrollCalculator::new(repository);
        let payroll = calculator
            .compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"))
            .unwrap();

        assert_eq!(payroll.days_worked, 0);
        assert_eq!(payroll.gross_earnings, Decimal::ZERO);
        assert_eq!(payroll.overtime_pay, Decimal::ZERO);
        // net = allowances - statutory = 4500 - 1815
        assert_eq!(payroll.net_pay, dec("2685"));
    }

    /// PC-003: late login deduction
    #[test]
    fn test_late_login_deduction() {
        let repository = InMemoryRepository::new()
            .with_employee(test_employee())
            .with_attendance(vec![attendance(
                "2025-06-02",
                Some("08:20:00"),
                Some("17:00:00"),
            )]);

        let calculator = PayrollCalculator::new(repository);
        let payroll = calculator
            .compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"))
            .unwrap();

        let expected = Decimal::from(20) / Decimal::from(60) * dec("125");
        assert_eq!(payroll.late_deduction, expected);
    }

    /// PC-004: the net pay identity holds for every computed payroll
    #[test]
    fn test_net_pay_identity() {
        let repository = InMemoryRepository::new()
            .with_employee(test_employee())
            .with_attendance(vec![
                attendance("2025-06-02", Some("08:27:00"), Some("16:42:00")),
                attendance("2025-06-03", Some("08:00:00"), Some("19:15:00")),
            ])
            .with_leaves(vec![unpaid_leave(1, "2025-06-09", "2025-06-09")]);

        let calculator = PayrollCalculator::new(repository);
        let payroll = calculator
            .compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"))
            .unwrap();

        let expected = payroll.gross_income() + payroll.total_allowances()
            - (payroll.statutory_deductions()
                + payroll.late_deduction
                + payroll.undertime_deduction
                + payroll.unpaid_leave_deduction);
        assert_eq!(payroll.net_pay, expected);
    }

    /// PC-005: leave lookup failure degrades to zero deduction
    #[test]
    fn test_leave_lookup_failure_degrades_to_zero() {
        let inner = InMemoryRepository::new()
            .with_employee(test_employee())
            .with_attendance(vec![attendance(
                "2025-06-02",
                Some("08:00:00"),
                Some("17:00:00"),
            )]);
        let calculator = PayrollCalculator::new(LeaveFailingRepository(inner));

        let payroll = calculator
            .compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"))
            .unwrap();

        assert_eq!(payroll.unpaid_leave_deduction, Decimal::ZERO);
        assert_eq!(payroll.days_worked, 1);
    }

    /// PC-006: identical inputs yield identical results
    #[test]
    fn test_recomputation_is_idempotent() {
        let repository = InMemoryRepository::new()
            .with_employee(test_employee())
            .with_attendance(vec![
                attendance("2025-06-02", Some("08:20:00"), Some("16:40:00")),
                attendance("2025-06-03", Some("08:00:00"), Some("18:30:00")),
            ])
            .with_leaves(vec![unpaid_leave(1, "2025-06-09", "2025-06-10")]);

        let calculator = PayrollCalculator::new(repository);
        let first = calculator
            .compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"))
            .unwrap();
        let second = calculator
            .compute_payroll(10001, make_date("2025-06-01"), make_date("2025-06-30"))
            .unwrap();

        assert_eq!(first, second);
    }

    /// PC-007: contractual employees get no allowances but keep statutory
    #[test]
    fn test_contractual_employee_payroll() {
        let employee = Employee::with_default_allowances(
            10002,
            "Jose",
            "Santos",
            "Field Technician",
            "Operations",
            EmployeeType::Contractual,
            dec("22000"),
        );
        let mut attendance_record =
            attendance("2025-06-02", Some("08:00:00"), Some("16:00:00"));
        attendance_record.employee_id = 10002;

        let repository = InMemoryRepository::new()
            .with_employee(employee)
            .with_attendance(vec![attendance_record]);
        let calculator = PayrollCalculator::new(repository);

        let payroll = calculator
            .compute_payroll(10002, make_date("2025-06-01"), make_date("2025-06-30"))
            .unwrap();

        assert_eq!(payroll.total_allowances(), Decimal::ZERO);
        assert_eq!(payroll.statutory_deductions(), dec("1815"));
        // 1000 basic - 1815 statutory - 125 undertime
        assert_eq!(payroll.net_pay, dec("-940"));
    }

    #[test]
    fn test_overlap_check_through_repository() {
        let repository = InMemoryRepository::new().with_leaves(vec![LeaveRequest {
            leave_id: 42,
            employee_id: 10001,
            leave_type: "Vacation".to_string(),
            start_date: make_date("2025-01-14"),
            end_date: make_date("2025-01-20"),
            status: LeaveStatus::Approved,
        }]);
        let calculator = PayrollCalculator::new(repository);

        assert!(
            calculator
                .has_overlapping_approved_leave(
                    10001,
                    make_date("2025-01-10"),
                    make_date("2025-01-15"),
                    None,
                )
                .unwrap()
        );
        assert!(
            !calculator
                .has_overlapping_approved_leave(
                    10001,
                    make_date("2025-01-01"),
                    make_date("2025-01-05"),
                    None,
                )
                .unwrap()
        );
        assert!(
            !calculator
                .has_overlapping_approved_leave(
                    10001,
                    make_date("2025-01-10"),
                    make_date("2025-01-15"),
                    Some(42),
                )
                .unwrap()
        );
    }
}
