//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DEFAULT_ANNUAL_LEAVE_DAYS, calculate_payroll, check_annual_leave,
    compute_attendance_hours_from_str, compute_deductions_with_rates, compute_leave_days_from_str,
    normalize_pay_period,
};
use crate::config::DeductionRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, LeaveBalance, PayrollCalculationResult, PayrollRequest};

use super::request::{AttendanceRequest, DeductionRequest, LeaveDaysRequest};
use super::response::{ApiError, ApiErrorResponse, DeductionResponse, LeaveDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/deductions", post(deductions_handler))
        .route("/payroll", post(payroll_handler))
        .route("/pay-periods/:token", get(pay_period_handler))
        .route("/leave/days", post(leave_days_handler))
        .route("/attendance/hours", post(attendance_handler))
        .with_state(state)
}

/// Handler for POST /deductions.
///
/// Uses the rates effective on the first day of `pay_period` when one is
/// given, and the most recent loaded rate table otherwise.
async fn deductions_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeductionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deduction request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = deduction_rates(&state, request.pay_period.as_deref())
        .and_then(|rates| compute_deductions_with_rates(&request.compensation, &rates));

    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                gross_pay = %breakdown.gross_pay,
                net_pay = %breakdown.net_pay,
                "Deductions computed"
            );
            json_response(
                StatusCode::OK,
                DeductionResponse {
                    breakdown,
                    rounded: breakdown.rounded(),
                },
            )
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn deduction_rates(state: &AppState, pay_period: Option<&str>) -> EngineResult<DeductionRates> {
    let config = state.payroll_config();
    match pay_period {
        Some(token) => {
            let period = normalize_pay_period(token)?;
            Ok(config.rates_for(period.start_date)?.deductions)
        }
        None => Ok(config
            .latest_rates()
            .map(|table| table.deductions)
            .unwrap_or_default()),
    }
}

/// Handler for POST /payroll.
///
/// Returns the full payroll record together with its audit trace.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match calculate_payroll(&request, state.payroll_config()) {
        Ok(calculation) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = request.employee_id,
                pay_period = %request.pay_period,
                gross_pay = %calculation.record.gross_pay,
                net_pay = %calculation.record.net_pay,
                warnings = calculation.warnings.len(),
                duration_us = duration.as_micros(),
                "Payroll calculation completed successfully"
            );
            let result = PayrollCalculationResult {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                rounded: calculation.breakdown.rounded(),
                record: calculation.record,
                audit_trace: AuditTrace {
                    steps: calculation.audit_steps,
                    warnings: calculation.warnings,
                    duration_us: duration.as_micros() as u64,
                },
            };
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /pay-periods/{token}.
async fn pay_period_handler(Path(token): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match normalize_pay_period(&token) {
        Ok(period) => json_response(StatusCode::OK, period),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /leave/days.
///
/// Annual leave is also checked against the remaining balance, which
/// defaults to the full yearly entitlement when the caller supplies none.
async fn leave_days_handler(payload: Result<Json<LeaveDaysRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let span = match compute_leave_days_from_str(&request.start_date, &request.end_date) {
        Ok(span) => span,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let draws_balance = request
        .leave_type
        .is_some_and(|leave_type| leave_type.draws_annual_balance());
    let balance = if draws_balance {
        let available = request.remaining_days.unwrap_or(DEFAULT_ANNUAL_LEAVE_DAYS);
        let balance = LeaveBalance::new(span.start_date.year(), available);
        let requested = Decimal::from(span.days);
        match check_annual_leave(&balance, requested) {
            Ok(left) => Some(LeaveBalance {
                used_days: requested,
                remaining_days: left,
                ..balance
            }),
            Err(err) => return engine_error_response(err, correlation_id),
        }
    } else {
        None
    };

    json_response(
        StatusCode::OK,
        LeaveDaysResponse {
            start_date: span.start_date,
            end_date: span.end_date,
            days: span.days,
            remaining_days: balance.as_ref().map(|b| b.remaining_days),
            balance,
        },
    )
}

/// Handler for POST /attendance/hours.
async fn attendance_handler(payload: Result<Json<AttendanceRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match compute_attendance_hours_from_str(&request.clock_in, &request.clock_out) {
        Ok(hours) => json_response(StatusCode::OK, hours),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    if err.is_validation() {
        warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    } else {
        tracing::error!(correlation_id = %correlation_id, error = %err, "Configuration failure");
    }
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
