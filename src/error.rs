//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::repository::RepositoryError;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound { employee_id: 10032 };
/// assert_eq!(error.to_string(), "Employee not found with ID: 10032");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The employee ID was zero or negative.
    #[error("Invalid employee ID: {employee_id}")]
    InvalidEmployeeId {
        /// The rejected employee ID.
        employee_id: i32,
    },

    /// The pay period end date precedes its start date.
    #[error("Period end {end} is before period start {start}")]
    InvalidPeriod {
        /// The start of the rejected period.
        start: NaiveDate,
        /// The end of the rejected period.
        end: NaiveDate,
    },

    /// No employee record exists for the given ID.
    #[error("Employee not found with ID: {employee_id}")]
    EmployeeNotFound {
        /// The employee ID that was looked up.
        employee_id: i32,
    },

    /// An employment-status string did not name a known employee type.
    #[error("Unknown employment status: {status}")]
    UnknownEmploymentStatus {
        /// The status string that failed to resolve.
        status: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A data-access failure aborted a payroll computation.
    ///
    /// Wraps the underlying repository error; the computation that hit it
    /// produces no partial result.
    #[error("Failed to calculate payroll for employee {employee_id}: {source}")]
    Calculation {
        /// The employee whose computation failed.
        employee_id: i32,
        /// The repository failure that caused the abort.
        #[source]
        source: RepositoryError,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
