//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the payroll,
//! payslip, and leave-overlap endpoints, and their conversions into
//! domain types.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::{Attendance, Employee, EmployeeType, LeaveRequest, LeaveStatus};

/// Request body for the `/payroll/calculate` and `/payslip/generate`
/// endpoints.
///
/// Carries the complete data set the computation runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee the payroll is for.
    pub employee: EmployeePayload,
    /// The pay period to compute.
    pub period: PeriodPayload,
    /// Attendance records for the period.
    #[serde(default)]
    pub attendance: Vec<AttendancePayload>,
    /// Leave requests on file for the employee.
    #[serde(default)]
    pub leave_requests: Vec<LeavePayload>,
}

/// Employee information in a payroll request.
///
/// The employment status arrives as a string and is resolved through
/// [`EmployeeType::from_status`]. Allowance fields left out fall back to
/// the defaults of the resolved employee type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayload {
    /// Unique identifier for the employee.
    pub employee_id: i32,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// Job position title.
    pub position: String,
    /// Department the position belongs to.
    pub department: String,
    /// Employment status, e.g. "Regular" or "Contractual".
    pub employment_status: String,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly rice subsidy; defaults by employee type when absent.
    #[serde(default)]
    pub rice_subsidy: Option<Decimal>,
    /// Monthly phone allowance; defaults by employee type when absent.
    #[serde(default)]
    pub phone_allowance: Option<Decimal>,
    /// Monthly clothing allowance; defaults by employee type when absent.
    #[serde(default)]
    pub clothing_allowance: Option<Decimal>,
    /// Immediate supervisor, referenced by name.
    #[serde(default)]
    pub supervisor: Option<String>,
}

/// Pay period information in a payroll request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodPayload {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// One attendance record in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendancePayload {
    /// Calendar day of the record.
    pub date: NaiveDate,
    /// Login timestamp, if the employee logged in.
    #[serde(default)]
    pub log_in: Option<NaiveDateTime>,
    /// Logout timestamp, if the employee logged out.
    #[serde(default)]
    pub log_out: Option<NaiveDateTime>,
}

/// One leave request in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeavePayload {
    /// Identifier of the leave row; zero when not yet persisted.
    #[serde(default)]
    pub leave_id: i64,
    /// Free-form leave type, e.g. "Vacation", "Sick", "Unpaid".
    pub leave_type: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval status.
    pub status: LeaveStatus,
}

/// Request body for the `/leave/check-overlap` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapCheckRequest {
    /// The employee the candidate leave belongs to.
    pub employee_id: i32,
    /// First day of the candidate leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the candidate leave (inclusive).
    pub end_date: NaiveDate,
    /// Leave row to exclude, for update-in-place validation.
    #[serde(default)]
    pub exclude_leave_id: Option<i64>,
    /// The leave rows already on file.
    #[serde(default)]
    pub existing_leaves: Vec<LeaveRequest>,
}

impl TryFrom<EmployeePayload> for Employee {
    type Error = PayrollError;

    fn try_from(payload: EmployeePayload) -> Result<Self, Self::Error> {
        let employee_type = EmployeeType::from_status(&payload.employment_status)?;

        Ok(Employee {
            employee_id: payload.employee_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            position: payload.position,
            department: payload.department,
            employee_type,
            basic_salary: payload.basic_salary,
            rice_subsidy: payload
                .rice_subsidy
                .unwrap_or_else(|| employee_type.default_rice_subsidy()),
            phone_allowance: payload
                .phone_allowance
                .unwrap_or_else(|| employee_type.default_phone_allowance()),
            clothing_allowance: payload
                .clothing_allowance
                .unwrap_or_else(|| employee_type.default_clothing_allowance()),
            supervisor: payload.supervisor,
        })
    }
}

impl AttendancePayload {
    /// Converts into a domain attendance record for the given employee.
    pub fn into_attendance(self, employee_id: i32) -> Attendance {
        Attendance {
            employee_id,
            date: self.date,
            log_in: self.log_in,
            log_out: self.log_out,
        }
    }
}

impl LeavePayload {
    /// Converts into a domain leave request for the given employee.
    pub fn into_leave_request(self, employee_id: i32) -> LeaveRequest {
        LeaveRequest {
            leave_id: self.leave_id,
            employee_id,
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
        }
    }
}
