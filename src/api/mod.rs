//! HTTP API module for the payroll engine.
//!
//! This module exposes the deduction, payroll, pay period, leave and
//! attendance calculations as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, DeductionRequest, LeaveDaysRequest};
pub use response::{ApiError, ApiErrorResponse, DeductionResponse, LeaveDaysResponse};
pub use state::AppState;
