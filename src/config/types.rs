//! Configuration types for the payroll engine.
//!
//! Every section has defaults matching the standard company setup, so the
//! engine runs without a configuration file present.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standard work schedule payroll arithmetic is anchored to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Working days per month used to derive the daily rate.
    #[serde(default = "default_working_days_per_month")]
    pub working_days_per_month: u32,
    /// Standard working hours per day; hours beyond this are overtime.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,
    /// Premium multiplier applied to overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// The scheduled start of the working day.
    #[serde(default = "default_standard_login")]
    pub standard_login: NaiveTime,
    /// Logins strictly after this time accrue a late deduction.
    #[serde(default = "default_late_threshold")]
    pub late_threshold: NaiveTime,
    /// The scheduled end of the working day; earlier logouts accrue undertime.
    #[serde(default = "default_standard_logout")]
    pub standard_logout: NaiveTime,
}

fn default_working_days_per_month() -> u32 {
    22
}

fn default_hours_per_day() -> u32 {
    8
}

fn default_overtime_multiplier() -> Decimal {
    Decimal::new(125, 2)
}

fn default_standard_login() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

fn default_late_threshold() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 15, 0).unwrap()
}

fn default_standard_logout() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap()
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            working_days_per_month: default_working_days_per_month(),
            hours_per_day: default_hours_per_day(),
            overtime_multiplier: default_overtime_multiplier(),
            standard_login: default_standard_login(),
            late_threshold: default_late_threshold(),
            standard_logout: default_standard_logout(),
        }
    }
}

/// Company identity printed on payslip documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company name.
    #[serde(default = "default_company_name")]
    pub name: String,
    /// Street address.
    #[serde(default = "default_company_address")]
    pub address: String,
    /// Contact phone numbers.
    #[serde(default = "default_company_phone")]
    pub phone: String,
    /// Contact email address.
    #[serde(default = "default_company_email")]
    pub email: String,
}

fn default_company_name() -> String {
    "MotorPH".to_string()
}

fn default_company_address() -> String {
    "7 Jupiter Avenue cor. F. Sandoval Jr., Bagong Nayon, Quezon City".to_string()
}

fn default_company_phone() -> String {
    "Phone: (028) 911-5071 / (028) 911-5072 / (028) 911-5073".to_string()
}

fn default_company_email() -> String {
    "Email: corporate@motorph.com".to_string()
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            address: default_company_address(),
            phone: default_company_phone(),
            email: default_company_email(),
        }
    }
}

/// Payslip numbering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipConfig {
    /// Prefix of generated payslip numbers, e.g. "PS" in `PS-10001-2025-06`.
    #[serde(default = "default_number_prefix")]
    pub number_prefix: String,
}

fn default_number_prefix() -> String {
    "PS".to_string()
}

impl Default for PayslipConfig {
    fn default() -> Self {
        Self {
            number_prefix: default_number_prefix(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Company identity for rendered documents.
    #[serde(default)]
    pub company: CompanyProfile,
    /// Work schedule the calculations are anchored to.
    #[serde(default)]
    pub schedule: WorkSchedule,
    /// Payslip numbering settings.
    #[serde(default)]
    pub payslip: PayslipConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_schedule_matches_standard_setup() {
        let schedule = WorkSchedule::default();
        assert_eq!(schedule.working_days_per_month, 22);
        assert_eq!(schedule.hours_per_day, 8);
        assert_eq!(
            schedule.overtime_multiplier,
            Decimal::from_str("1.25").unwrap()
        );
        assert_eq!(schedule.standard_login, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(schedule.late_threshold, NaiveTime::from_hms_opt(8, 15, 0).unwrap());
        assert_eq!(schedule.standard_logout, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
schedule:
  working_days_per_month: 20
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.schedule.working_days_per_month, 20);
        assert_eq!(config.schedule.hours_per_day, 8);
        assert_eq!(config.company.name, "MotorPH");
        assert_eq!(config.payslip.number_prefix, "PS");
    }

    #[test]
    fn test_empty_mapping_yields_full_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
