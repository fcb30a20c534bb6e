//! Engine configuration.
//!
//! This module contains the configuration types for the payroll engine
//! (work schedule, company profile, payslip numbering) and the YAML loader.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyProfile, EngineConfig, PayslipConfig, WorkSchedule};
