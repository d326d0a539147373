//! Core data models for the payroll engine.
//!
//! This module contains the typed records exchanged between the presentation
//! layer, the calculators, and the external payroll API.

mod attendance;
mod calculation_result;
mod compensation;
mod deduction_breakdown;
mod leave;
mod pay_period;
mod payroll_record;

pub use attendance::AttendanceHours;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, PayrollCalculationResult};
pub(crate) use compensation::{ensure_non_negative, lenient_amount};
pub use compensation::CompensationInput;
pub use deduction_breakdown::{DeductionBreakdown, round_won};
pub use leave::{LeaveBalance, LeaveSpan, LeaveType};
pub use pay_period::PayPeriod;
pub use payroll_record::{PayrollRecord, PayrollRequest};
