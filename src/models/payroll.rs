//! The computed payroll result.
//!
//! [`Payroll`] captures every figure a payslip needs. It is constructed
//! fresh per computation request and never mutated after being handed to a
//! renderer. It deliberately carries no run-specific identity (no UUID, no
//! timestamp): identical inputs against unchanged data produce an identical
//! value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// The complete result of one payroll computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    /// The employee the computation is for.
    pub employee_id: i32,
    /// The pay period covered.
    pub period: PayPeriod,
    /// Monthly basic salary the rates derive from.
    pub monthly_rate: Decimal,
    /// Daily rate (monthly rate over the working-days-per-month convention).
    pub daily_rate: Decimal,
    /// Days with a recorded login during the period.
    pub days_worked: u32,
    /// Hours worked beyond the standard day, summed over the period.
    pub overtime_hours: Decimal,
    /// Basic pay for the days worked.
    pub gross_earnings: Decimal,
    /// Premium pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Monthly rice subsidy.
    pub rice_subsidy: Decimal,
    /// Monthly phone allowance.
    pub phone_allowance: Decimal,
    /// Monthly clothing allowance.
    pub clothing_allowance: Decimal,
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG contribution.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
    /// Deduction accrued from late logins.
    pub late_deduction: Decimal,
    /// Deduction accrued from early logouts.
    pub undertime_deduction: Decimal,
    /// Deduction for approved unpaid leave days.
    pub unpaid_leave_deduction: Decimal,
    /// Sum of every deduction: statutory, late, undertime, and unpaid leave.
    pub total_deductions: Decimal,
    /// Take-home pay.
    pub net_pay: Decimal,
}

impl Payroll {
    /// Sum of the fixed monthly allowances.
    pub fn total_allowances(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }

    /// Sum of the statutory contributions alone.
    pub fn statutory_deductions(&self) -> Decimal {
        self.sss + self.philhealth + self.pagibig + self.withholding_tax
    }

    /// Earnings before allowances and deductions.
    pub fn gross_income(&self) -> Decimal {
        self.gross_earnings + self.overtime_pay
    }
}
