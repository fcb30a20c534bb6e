//! Payslip data shaping and text rendering.
//!
//! [`to_payslip_view`] projects an employee and a computed payroll into a
//! flat, renderer-agnostic record with pre-formatted currency fields.
//! [`render_text`] turns that view into the plain-text payslip document;
//! PDF/Excel renderers consume the same view in the external report layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompanyProfile;
use crate::models::{Employee, Payroll};

/// A flat, renderer-agnostic projection of one payslip.
///
/// All currency fields are pre-formatted with the peso sign, two decimal
/// places, and thousands separators. No business logic is applied here
/// beyond field mapping and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipView {
    /// Payslip number, e.g. `PS-10001-2025-06`.
    pub payslip_no: String,
    /// The employee's ID.
    pub employee_id: i32,
    /// The employee's full name.
    pub employee_name: String,
    /// Job position title.
    pub position: String,
    /// Department name.
    pub department: String,
    /// Employee type label, e.g. "Regular".
    pub employee_type: String,
    /// Period start, formatted `MM/dd/yyyy`.
    pub period_start: String,
    /// Period end, formatted `MM/dd/yyyy`.
    pub period_end: String,
    /// Monthly rate, formatted as currency.
    pub monthly_rate: String,
    /// Daily rate, formatted as currency.
    pub daily_rate: String,
    /// Days worked in the period.
    pub days_worked: u32,
    /// Overtime hours in the period, as a plain decimal string.
    pub overtime_hours: String,
    /// Basic pay, formatted as currency.
    pub basic_pay: String,
    /// Overtime pay, formatted as currency.
    pub overtime_pay: String,
    /// Gross income (basic plus overtime), formatted as currency.
    pub gross_income: String,
    /// Rice subsidy, formatted as currency.
    pub rice_subsidy: String,
    /// Phone allowance, formatted as currency.
    pub phone_allowance: String,
    /// Clothing allowance, formatted as currency.
    pub clothing_allowance: String,
    /// Total benefits, formatted as currency.
    pub total_benefits: String,
    /// SSS contribution, formatted as currency.
    pub sss: String,
    /// PhilHealth contribution, formatted as currency.
    pub philhealth: String,
    /// Pag-IBIG contribution, formatted as currency.
    pub pagibig: String,
    /// Withholding tax, formatted as currency.
    pub withholding_tax: String,
    /// Late deduction, formatted as currency.
    pub late_deduction: String,
    /// Undertime deduction, formatted as currency.
    pub undertime_deduction: String,
    /// Unpaid-leave deduction, formatted as currency.
    pub unpaid_leave_deduction: String,
    /// Total deductions, formatted as currency.
    pub total_deductions: String,
    /// Take-home pay, formatted as currency.
    pub net_pay: String,
}

/// Projects an employee and a computed payroll into a [`PayslipView`].
///
/// The payslip number is `"<prefix>-<employee_id>-<yyyy-MM>"`, where the
/// month component comes from the period end date.
///
/// # Examples
///
/// ```
/// use payroll_engine::payslip::to_payslip_view;
/// # use payroll_engine::calculation::PayrollCalculator;
/// # use payroll_engine::models::{Employee, EmployeeType};
/// # use payroll_engine::repository::InMemoryRepository;
/// # use chrono::NaiveDate;
/// # use rust_decimal::Decimal;
/// # let employee = Employee::with_default_allowances(
/// #     10023, "Ana", "Reyes", "HR Specialist", "Human Resources",
/// #     EmployeeType::Regular, Decimal::from(22000),
/// # );
/// # let repository = InMemoryRepository::new().with_employee(employee.clone());
/// # let payroll = PayrollCalculator::new(repository).compute_payroll(
/// #     10023,
/// #     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
/// #     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// # ).unwrap();
/// let view = to_payslip_view(&employee, &payroll, "PS");
/// assert_eq!(view.payslip_no, "PS-10023-2025-06");
/// assert_eq!(view.period_end, "06/30/2025");
/// ```
pub fn to_payslip_view(employee: &Employee, payroll: &Payroll, prefix: &str) -> PayslipView {
    let payslip_no = format!(
        "{}-{}-{}",
        prefix,
        employee.employee_id,
        payroll.period.end_date.format("%Y-%m")
    );

    PayslipView {
        payslip_no,
        employee_id: employee.employee_id,
        employee_name: employee.full_name(),
        position: employee.position.clone(),
        department: employee.department.clone(),
        employee_type: employee.employee_type.label().to_string(),
        period_start: payroll.period.start_date.format("%m/%d/%Y").to_string(),
        period_end: payroll.period.end_date.format("%m/%d/%Y").to_string(),
        monthly_rate: format_currency(payroll.monthly_rate),
        daily_rate: format_currency(payroll.daily_rate),
        days_worked: payroll.days_worked,
        overtime_hours: payroll.overtime_hours.normalize().to_string(),
        basic_pay: format_currency(payroll.gross_earnings),
        overtime_pay: format_currency(payroll.overtime_pay),
        gross_income: format_currency(payroll.gross_income()),
        rice_subsidy: format_currency(payroll.rice_subsidy),
        phone_allowance: format_currency(payroll.phone_allowance),
        clothing_allowance: format_currency(payroll.clothing_allowance),
        total_benefits: format_currency(payroll.total_allowances()),
        sss: format_currency(payroll.sss),
        philhealth: format_currency(payroll.philhealth),
        pagibig: format_currency(payroll.pagibig),
        withholding_tax: format_currency(payroll.withholding_tax),
        late_deduction: format_currency(payroll.late_deduction),
        undertime_deduction: format_currency(payroll.undertime_deduction),
        unpaid_leave_deduction: format_currency(payroll.unpaid_leave_deduction),
        total_deductions: format_currency(payroll.total_deductions),
        net_pay: format_currency(payroll.net_pay),
    }
}

/// Formats an amount with the peso sign, two decimal places, and
/// thousands separators.
///
/// # Examples
///
/// ```
/// use payroll_engine::payslip::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1234567.891").unwrap()), "₱1,234,567.89");
/// assert_eq!(format_currency(Decimal::ZERO), "₱0.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let unsigned = rounded.abs().to_string();

    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), format!("{:0<2}", fraction)),
        None => (unsigned.clone(), "00".to_string()),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("₱{}{}.{}", sign, grouped, fraction_part)
}

/// Renders a payslip view as the plain-text payslip document.
///
/// Pure string building; saving the document is the caller's concern.
pub fn render_text(view: &PayslipView, company: &CompanyProfile) -> String {
    let rule = "=".repeat(80);
    let dash = "-".repeat(80);
    let subtotal_rule = format!("{:>64}", "____________");

    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{:^80}\n", company.name));
    out.push_str(&format!("{:^80}\n", company.address));
    out.push_str(&format!("{:^80}\n", company.phone));
    out.push_str(&format!("{:^80}\n", company.email));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{:^80}\n", "EMPLOYEE PAYSLIP"));
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str(&format!("PAYSLIP NO: {}\n", view.payslip_no));
    out.push_str(&format!("EMPLOYEE ID: {}\n", view.employee_id));
    out.push_str(&format!("EMPLOYEE NAME: {}\n", view.employee_name));
    out.push_str(&format!("POSITION: {}\n", view.position));
    out.push_str(&format!("DEPARTMENT: {}\n", view.department));
    out.push_str(&format!("EMPLOYEE TYPE: {}\n", view.employee_type));
    out.push_str(&format!(
        "PERIOD: {} to {}\n\n",
        view.period_start, view.period_end
    ));

    out.push_str("EARNINGS:\n");
    out.push_str(&dash);
    out.push('\n');
    out.push_str(&format!("{:<30} {:>20}\n", "Monthly Rate", view.monthly_rate));
    out.push_str(&format!("{:<30} {:>20}\n", "Daily Rate", view.daily_rate));
    out.push_str(&format!("{:<30} {:>20}\n", "Days Worked", view.days_worked));
    out.push_str(&format!("{:<30} {:>20}\n", "Basic Pay", view.basic_pay));
    out.push_str(&format!("{:<30} {:>20}\n", "Overtime Pay", view.overtime_pay));
    out.push_str(&subtotal_rule);
    out.push('\n');
    out.push_str(&format!("{:<30} {:>20}\n\n", "GROSS INCOME", view.gross_income));

    out.push_str("BENEFITS:\n");
    out.push_str(&dash);
    out.push('\n');
    out.push_str(&format!("{:<30} {:>20}\n", "Rice Subsidy", view.rice_subsidy));
    out.push_str(&format!("{:<30} {:>20}\n", "Phone Allowance", view.phone_allowance));
    out.push_str(&format!(
        "{:<30} {:>20}\n",
        "Clothing Allowance", view.clothing_allowance
    ));
    out.push_str(&subtotal_rule);
    out.push('\n');
    out.push_str(&format!("{:<30} {:>20}\n\n", "TOTAL BENEFITS", view.total_benefits));

    out.push_str("DEDUCTIONS:\n");
    out.push_str(&dash);
    out.push('\n');
    out.push_str(&format!("{:<30} {:>20}\n", "Social Security System", view.sss));
    out.push_str(&format!("{:<30} {:>20}\n", "PhilHealth", view.philhealth));
    out.push_str(&format!("{:<30} {:>20}\n", "Pag-IBIG", view.pagibig));
    out.push_str(&format!("{:<30} {:>20}\n", "Withholding Tax", view.withholding_tax));
    out.push_str(&format!("{:<30} {:>20}\n", "Late", view.late_deduction));
    out.push_str(&format!("{:<30} {:>20}\n", "Undertime", view.undertime_deduction));
    out.push_str(&format!(
        "{:<30} {:>20}\n",
        "Unpaid Leave", view.unpaid_leave_deduction
    ));
    out.push_str(&subtotal_rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<30} {:>20}\n\n",
        "TOTAL DEDUCTIONS", view.total_deductions
    ));

    out.push_str("SUMMARY:\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{:<30} {:>20}\n", "Gross Income", view.gross_income));
    out.push_str(&format!("{:<30} {:>20}\n", "Benefits", view.total_benefits));
    out.push_str(&format!("{:<30} {:>20}\n", "Deductions", view.total_deductions));
    out.push_str(&subtotal_rule);
    out.push('\n');
    out.push_str(&format!("{:<30} {:>20}\n", "TAKE HOME PAY", view.net_pay));
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str("This payslip is computer-generated and does not require a signature.\n");
    out.push_str(&rule);
    out.push('\n');

    out
}
