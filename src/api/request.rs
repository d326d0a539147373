//! Request types for the payroll engine API.
//!
//! `POST /payroll` takes a [`PayrollRequest`](crate::models::PayrollRequest)
//! directly; the bodies below cover the remaining endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationInput, LeaveType};

/// Request body for the `/deductions` endpoint.
///
/// The compensation amounts sit at the top level of the body. When
/// `pay_period` is given the rates effective on its first day apply;
/// otherwise the most recent loaded rate table does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionRequest {
    /// Amounts to compute deductions for.
    #[serde(flatten)]
    pub compensation: CompensationInput,
    /// Optional `YYYY-MM` token selecting the rate table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period: Option<String>,
}

/// Request body for the `/leave/days` endpoint.
///
/// Dates are taken as strings so that unparseable values surface as
/// validation errors with the offending field named.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDaysRequest {
    /// First day of leave (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last day of leave (`YYYY-MM-DD`).
    pub end_date: String,
    /// Kind of leave requested.
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    /// Annual leave days still available; checked for annual leave only.
    /// Defaults to the full yearly entitlement when absent.
    #[serde(default)]
    pub remaining_days: Option<Decimal>,
}

/// Request body for the `/attendance/hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Clock-in time (`HH:MM:SS`).
    pub clock_in: String,
    /// Clock-out time (`HH:MM:SS`).
    pub clock_out: String,
}
