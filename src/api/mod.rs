//! HTTP API for the payroll engine.
//!
//! The API is stateless: each request carries the employee, attendance,
//! and leave data the computation runs against.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendancePayload, EmployeePayload, LeavePayload, OverlapCheckRequest, PayrollRequest,
    PeriodPayload,
};
pub use response::{ApiError, ApiErrorResponse, OverlapCheckResponse, PayslipResponse};
pub use state::AppState;
