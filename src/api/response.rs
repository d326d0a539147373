//! Response types for the payroll engine API.
//!
//! This module defines the success bodies that are not plain models, the
//! error response structure, and the mapping from [`EngineError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DeductionBreakdown, LeaveBalance};

/// Response body for `POST /deductions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionResponse {
    /// Full-precision breakdown.
    pub breakdown: DeductionBreakdown,
    /// The same breakdown rounded to whole currency units.
    pub rounded: DeductionBreakdown,
}

/// Response body for `POST /leave/days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDaysResponse {
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// Inclusive day count.
    pub days: u32,
    /// Annual leave left after this request, for annual leave only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_days: Option<Decimal>,
    /// The annual balance after this request. `total_days` is what was
    /// available before it and `used_days` is this request's draw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<LeaveBalance>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Builds a `400 Bad Request` response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::BaseSalaryRequired | EngineError::NegativeAmount { .. } => {
                Self::bad_request(ApiError::validation_error(message))
            }
            EngineError::AmountOutOfRange { field } => Self::bad_request(ApiError::with_details(
                "VALIDATION_ERROR",
                message,
                format!("'{}' is too large to calculate", field),
            )),
            EngineError::InvalidPeriod { token } => Self::bad_request(ApiError::with_details(
                "INVALID_PERIOD",
                message,
                format!("Expected a YYYY-MM token with month 01-12, got '{}'", token),
            )),
            EngineError::InvalidDate { field, .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE",
                message,
                format!("Field '{}' could not be parsed", field),
            )),
            EngineError::InvalidRange { .. } => {
                Self::bad_request(ApiError::new("INVALID_RANGE", message))
            }
            EngineError::InsufficientLeaveBalance { remaining, .. } => {
                Self::bad_request(ApiError::with_details(
                    "INSUFFICIENT_LEAVE_BALANCE",
                    message,
                    format!("remaining_days: {}", remaining.normalize()),
                ))
            }
            EngineError::RatesNotFound { .. } => Self::bad_request(ApiError::with_details(
                "RATES_NOT_FOUND",
                message,
                "The pay period predates every configured rate table",
            )),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
