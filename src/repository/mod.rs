//! Data access for the payroll engine.
//!
//! The engine reads employees, attendance, and approved leaves through the
//! [`PayrollRepository`] trait, keeping the calculation core free of any
//! persistence technology. [`InMemoryRepository`] is the in-process
//! implementation used by the API layer and tests; a relational store
//! would implement the same trait.

mod memory;

pub use memory::InMemoryRepository;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Attendance, Employee, LeaveRequest};

/// A failure in the data-access layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store failed to serve a query.
    #[error("data access failed: {message}")]
    Backend {
        /// A description of the backend failure.
        message: String,
    },
}

/// Read interface the payroll computation consumes.
///
/// Implementations must be safe to share across threads; each computation
/// issues a synchronous sequence of reads and holds no state between them.
pub trait PayrollRepository: Send + Sync {
    /// Loads one employee record, or `None` when the ID is unknown.
    fn load_employee(&self, employee_id: i32) -> Result<Option<Employee>, RepositoryError>;

    /// Loads the employee's attendance records dated within `[start, end]`.
    ///
    /// Order is unspecified; the calculation does not depend on it.
    fn load_attendance(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Attendance>, RepositoryError>;

    /// Loads the employee's Approved leave requests whose intervals
    /// intersect `[start, end]`.
    fn load_approved_leaves(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveRequest>, RepositoryError>;
}
