//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::PayrollCalculator;
use crate::error::PayrollResult;
use crate::models::{Attendance, Employee, LeaveRequest, Payroll};
use crate::payslip::{render_text, to_payslip_view};
use crate::repository::InMemoryRepository;

use super::request::{OverlapCheckRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse, OverlapCheckResponse, PayslipResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_payroll_handler))
        .route("/payslip/generate", post(generate_payslip_handler))
        .route("/leave/check-overlap", post(check_overlap_handler))
        .with_state(state)
}

/// Handler for the POST /payroll/calculate endpoint.
///
/// Accepts a payroll request and returns the computed payroll.
async fn calculate_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match run_payroll(&state, request) {
        Ok((_, payroll)) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = payroll.employee_id,
                net_pay = %payroll.net_pay,
                "Payroll calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(payroll),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for the POST /payslip/generate endpoint.
///
/// Computes the payroll, shapes it into a payslip view, and renders the
/// plain-text document.
async fn generate_payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match run_payroll(&state, request) {
        Ok((employee, payroll)) => {
            let config = state.config();
            let view = to_payslip_view(&employee, &payroll, &config.payslip.number_prefix);
            let document = render_text(&view, &config.company);
            info!(
                correlation_id = %correlation_id,
                payslip_no = %view.payslip_no,
                "Payslip generated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(PayslipResponse {
                    payslip: view,
                    document,
                }),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for the POST /leave/check-overlap endpoint.
///
/// Validates a candidate leave interval against the Approved leaves on
/// file for the employee.
async fn check_overlap_handler(
    State(_state): State<AppState>,
    payload: Result<Json<OverlapCheckRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave overlap check");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let repository = InMemoryRepository::new().with_leaves(request.existing_leaves);
    let calculator = PayrollCalculator::new(repository);

    match calculator.has_overlapping_approved_leave(
        request.employee_id,
        request.start_date,
        request.end_date,
        request.exclude_leave_id,
    ) {
        Ok(overlapping) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(OverlapCheckResponse { overlapping }),
        )
            .into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Runs one payroll computation over the data carried by the request.
fn run_payroll(state: &AppState, request: PayrollRequest) -> PayrollResult<(Employee, Payroll)> {
    let employee: Employee = request.employee.try_into()?;
    let employee_id = employee.employee_id;

    let attendance: Vec<Attendance> = request
        .attendance
        .into_iter()
        .map(|record| record.into_attendance(employee_id))
        .collect();
    let leaves: Vec<LeaveRequest> = request
        .leave_requests
        .into_iter()
        .map(|leave| leave.into_leave_request(employee_id))
        .collect();

    let repository = InMemoryRepository::new()
        .with_employee(employee.clone())
        .with_attendance(attendance)
        .with_leaves(leaves);
    let calculator = PayrollCalculator::with_schedule(repository, state.config().schedule.clone());

    let payroll = calculator.compute_payroll(
        employee_id,
        request.period.start_date,
        request.period.end_date,
    )?;

    Ok((employee, payroll))
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error to its HTTP response.
fn error_response(
    correlation_id: Uuid,
    error: crate::error::PayrollError,
) -> axum::response::Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
