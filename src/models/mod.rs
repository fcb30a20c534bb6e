//! Domain models for the payroll engine.
//!
//! This module contains all the data structures used by the engine:
//! employees, attendance records, leave requests, pay periods, and the
//! computed payroll result.

mod attendance;
mod employee;
mod leave;
mod pay_period;
mod payroll;

pub use attendance::Attendance;
pub use employee::{Employee, EmployeeType};
pub use leave::{LeaveRequest, LeaveStatus};
pub use pay_period::PayPeriod;
pub use payroll::Payroll;
