//! In-memory repository implementation.

use chrono::NaiveDate;

use crate::models::{Attendance, Employee, LeaveRequest, LeaveStatus};

use super::{PayrollRepository, RepositoryError};

/// An in-process [`PayrollRepository`] backed by plain vectors.
///
/// Used by the stateless API layer (seeded from the request payload) and
/// by tests. Range filtering matches the relational queries it stands in
/// for: attendance by record date between the period endpoints, approved
/// leaves by interval intersection.
///
/// # Example
///
/// ```
/// use payroll_engine::repository::{InMemoryRepository, PayrollRepository};
/// use payroll_engine::models::{Employee, EmployeeType};
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
/// assert!(repository.load_employee(10001).unwrap().is_some());
/// assert!(repository.load_employee(99999).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    employees: Vec<Employee>,
    attendance: Vec<Attendance>,
    leaves: Vec<LeaveRequest>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee record, builder style.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds attendance records, builder style.
    pub fn with_attendance(mut self, records: impl IntoIterator<Item = Attendance>) -> Self {
        self.attendance.extend(records);
        self
    }

    /// Adds leave requests, builder style. Rows of any status may be
    /// stored; `load_approved_leaves` filters on status.
    pub fn with_leaves(mut self, leaves: impl IntoIterator<Item = LeaveRequest>) -> Self {
        self.leaves.extend(leaves);
        self
    }
}

impl PayrollRepository for InMemoryRepository {
    fn load_employee(&self, employee_id: i32) -> Result<Option<Employee>, RepositoryError> {
        Ok(self
            .employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .cloned())
    }

    fn load_attendance(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Attendance>, RepositoryError> {
        Ok(self
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee_id && a.date >= start && a.date <= end)
            .cloned()
            .collect())
    }

    fn load_approved_leaves(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveRequest>, RepositoryError> {
        Ok(self
            .leaves
            .iter()
            .filter(|l| {
                l.employee_id == employee_id
                    && l.status == LeaveStatus::Approved
                    && l.overlaps(start, end)
            })
            .cloned()
            .collect())
    }
}
