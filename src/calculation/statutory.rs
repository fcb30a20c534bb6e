//! Statutory contribution schemes.
//!
//! Government-mandated deductions (SSS, PhilHealth, Pag-IBIG, withholding
//! tax) are computed against the monthly basic salary, not gross pay. Each
//! employee type carries its own [`ContributionScheme`] implementation,
//! selected through the [`scheme_for`] factory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeType;

/// The statutory contributions for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG contribution.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
}

impl StatutoryDeductions {
    /// Sum of all four contributions.
    pub fn total(&self) -> Decimal {
        self.sss + self.philhealth + self.pagibig + self.withholding_tax
    }
}

/// The per-employee-type formula set for statutory contributions.
///
/// All amounts are pure functions of the monthly basic salary.
pub trait ContributionScheme {
    /// SSS contribution for the given salary.
    fn sss(&self, basic_salary: Decimal) -> Decimal;

    /// PhilHealth contribution for the given salary.
    fn philhealth(&self, basic_salary: Decimal) -> Decimal;

    /// Pag-IBIG contribution for the given salary.
    fn pagibig(&self, basic_salary: Decimal) -> Decimal;

    /// Monthly withholding tax for the given salary.
    fn withholding_tax(&self, basic_salary: Decimal) -> Decimal;

    /// All four contributions together.
    fn deductions(&self, basic_salary: Decimal) -> StatutoryDeductions {
        StatutoryDeductions {
            sss: self.sss(basic_salary),
            philhealth: self.philhealth(basic_salary),
            pagibig: self.pagibig(basic_salary),
            withholding_tax: self.withholding_tax(basic_salary),
        }
    }
}

/// Returns the contribution scheme for an employee type.
pub fn scheme_for(employee_type: EmployeeType) -> &'static dyn ContributionScheme {
    match employee_type {
        EmployeeType::Regular => &RegularScheme,
        EmployeeType::Contractual => &ContractualScheme,
    }
}

/// Contribution scheme for regular employees.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularScheme;

impl ContributionScheme for RegularScheme {
    fn sss(&self, basic_salary: Decimal) -> Decimal {
        if basic_salary <= Decimal::new(3250, 0) {
            return Decimal::new(1350, 1);
        }
        if basic_salary <= Decimal::new(25_000, 0) {
            return basic_salary * Decimal::new(45, 3);
        }
        // Contribution ceiling
        Decimal::new(1125, 0)
    }

    fn philhealth(&self, basic_salary: Decimal) -> Decimal {
        (basic_salary * Decimal::new(25, 3)).min(Decimal::new(1800, 0))
    }

    fn pagibig(&self, basic_salary: Decimal) -> Decimal {
        if basic_salary <= Decimal::new(1500, 0) {
            return basic_salary * Decimal::new(1, 2);
        }
        (basic_salary * Decimal::new(2, 2)).min(Decimal::new(100, 0))
    }

    fn withholding_tax(&self, basic_salary: Decimal) -> Decimal {
        train_law_monthly_tax(basic_salary)
    }
}

/// Contribution scheme for contractual employees.
///
/// Statutory remittance is mandated regardless of employment type, so the
/// bracket tables match the regular scheme; contractual staff differ in
/// allowances and benefit eligibility, not contributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractualScheme;

impl ContributionScheme for ContractualScheme {
    fn sss(&self, basic_salary: Decimal) -> Decimal {
        if basic_salary <= Decimal::new(3250, 0) {
            return Decimal::new(1350, 1);
        }
        if basic_salary <= Decimal::new(25_000, 0) {
            return basic_salary * Decimal::new(45, 3);
        }
        Decimal::new(1125, 0)
    }

    fn philhealth(&self, basic_salary: Decimal) -> Decimal {
        (basic_salary * Decimal::new(25, 3)).min(Decimal::new(1800, 0))
    }

    fn pagibig(&self, basic_salary: Decimal) -> Decimal {
        if basic_salary <= Decimal::new(1500, 0) {
            return basic_salary * Decimal::new(1, 2);
        }
        (basic_salary * Decimal::new(2, 2)).min(Decimal::new(100, 0))
    }

    fn withholding_tax(&self, basic_salary: Decimal) -> Decimal {
        train_law_monthly_tax(basic_salary)
    }
}

/// TRAIN-law progressive tax on the annualised salary, divided back to a
/// monthly figure.
fn train_law_monthly_tax(basic_salary: Decimal) -> Decimal {
    let months = Decimal::from(12);
    let annual = basic_salary * months;

    if annual <= Decimal::new(250_000, 0) {
        Decimal::ZERO
    } else if annual <= Decimal::new(400_000, 0) {
        (annual - Decimal::new(250_000, 0)) * Decimal::new(15, 2) / months
    } else if annual <= Decimal::new(800_000, 0) {
        (Decimal::new(22_500, 0) + (annual - Decimal::new(400_000, 0)) * Decimal::new(20, 2))
            / months
    } else if annual <= Decimal::new(2_000_000, 0) {
        (Decimal::new(102_500, 0) + (annual - Decimal::new(800_000, 0)) * Decimal::new(25, 2))
            / months
    } else if annual <= Decimal::new(8_000_000, 0) {
        (Decimal::new(402_500, 0) + (annual - Decimal::new(2_000_000, 0)) * Decimal::new(30, 2))
            / months
    } else {
        (Decimal::new(2_202_500, 0) + (annual - Decimal::new(8_000_000, 0)) * Decimal::new(35, 2))
            / months
    }
}
