//! Employee model and related types.
//!
//! This module defines the Employee struct and the EmployeeType tagged
//! union whose variants carry the per-type compensation rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{StatutoryDeductions, calculate_gross_pay, scheme_for};
use crate::config::WorkSchedule;
use crate::error::{PayrollError, PayrollResult};

/// The kind of employment arrangement an employee is under.
///
/// Each variant supplies its own default allowance amounts and benefit
/// eligibility, and selects the contribution scheme used for statutory
/// deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Regular employment with full allowances and benefits.
    Regular,
    /// Contractual employment with no fixed allowances or benefits.
    Contractual,
}

impl EmployeeType {
    /// Resolves an employment-status string to an employee type.
    ///
    /// Matching is case-insensitive and accepts both the short form
    /// (`"Regular"`) and the long form (`"Regular Employee"`) found in
    /// employee records.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::UnknownEmploymentStatus`] for any other
    /// string.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeType;
    ///
    /// assert_eq!(
    ///     EmployeeType::from_status("Regular").unwrap(),
    ///     EmployeeType::Regular
    /// );
    /// assert_eq!(
    ///     EmployeeType::from_status("contractual employee").unwrap(),
    ///     EmployeeType::Contractual
    /// );
    /// assert!(EmployeeType::from_status("Freelance").is_err());
    /// ```
    pub fn from_status(status: &str) -> PayrollResult<Self> {
        let normalized = status.trim().to_ascii_lowercase();
        let normalized = normalized.strip_suffix(" employee").unwrap_or(&normalized);

        match normalized {
            "regular" => Ok(EmployeeType::Regular),
            "contractual" => Ok(EmployeeType::Contractual),
            _ => Err(PayrollError::UnknownEmploymentStatus {
                status: status.to_string(),
            }),
        }
    }

    /// Returns the display label for this employee type.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeType::Regular => "Regular",
            EmployeeType::Contractual => "Contractual",
        }
    }

    /// Default monthly rice subsidy for this employee type.
    pub fn default_rice_subsidy(&self) -> Decimal {
        match self {
            EmployeeType::Regular => Decimal::new(1500, 0),
            EmployeeType::Contractual => Decimal::ZERO,
        }
    }

    /// Default monthly phone allowance for this employee type.
    pub fn default_phone_allowance(&self) -> Decimal {
        match self {
            EmployeeType::Regular => Decimal::new(2000, 0),
            EmployeeType::Contractual => Decimal::ZERO,
        }
    }

    /// Default monthly clothing allowance for this employee type.
    pub fn default_clothing_allowance(&self) -> Decimal {
        match self {
            EmployeeType::Regular => Decimal::new(1000, 0),
            EmployeeType::Contractual => Decimal::ZERO,
        }
    }

    /// Whether employees of this type are eligible for company benefits.
    pub fn is_eligible_for_benefits(&self) -> bool {
        match self {
            EmployeeType::Regular => true,
            EmployeeType::Contractual => false,
        }
    }
}

/// An employee record as loaded from the data-access layer.
///
/// The record is a read-only snapshot for the duration of one payroll
/// computation. Allowance amounts are stored on the record (they derive
/// from the position in the source system); [`Employee::with_default_allowances`]
/// fills them from the employee-type defaults when the source has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
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
    /// The employment arrangement.
    pub employee_type: EmployeeType,
    /// Monthly basic salary. Must be non-negative.
    pub basic_salary: Decimal,
    /// Monthly rice subsidy.
    pub rice_subsidy: Decimal,
    /// Monthly phone allowance.
    pub phone_allowance: Decimal,
    /// Monthly clothing allowance.
    pub clothing_allowance: Decimal,
    /// Immediate supervisor, referenced by name only.
    #[serde(default)]
    pub supervisor: Option<String>,
}

impl Employee {
    /// Creates an employee with allowances taken from the type defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn with_default_allowances(
        employee_id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        employee_type: EmployeeType,
        basic_salary: Decimal,
    ) -> Self {
        Self {
            employee_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            position: position.into(),
            department: department.into(),
            employee_type,
            basic_salary,
            rice_subsidy: employee_type.default_rice_subsidy(),
            phone_allowance: employee_type.default_phone_allowance(),
            clothing_allowance: employee_type.default_clothing_allowance(),
            supervisor: None,
        }
    }

    /// Returns the employee's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Sum of the fixed monthly allowances.
    pub fn total_allowances(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }

    /// Gross pay for the given worked days and overtime hours, using the
    /// standard 22-working-days-per-month convention.
    pub fn calculate_gross_pay(&self, days_worked: u32, overtime_hours: Decimal) -> Decimal {
        calculate_gross_pay(
            self.basic_salary,
            days_worked,
            overtime_hours,
            &WorkSchedule::default(),
        )
        .gross_pay()
    }

    /// Statutory contributions for this employee, computed against the
    /// basic salary by the variant's contribution scheme.
    pub fn statutory_deductions(&self) -> StatutoryDeductions {
        scheme_for(self.employee_type).deductions(self.basic_salary)
    }

    /// Whether this employee is eligible for company benefits.
    pub fn is_eligible_for_benefits(&self) -> bool {
        self.employee_type.is_eligible_for_benefits()
    }
}
