//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: the statutory
//! deduction formula, pay period normalization, leave day counting and
//! annual leave checks, overtime and holiday premium pay, attendance hour
//! derivation, and the full monthly payroll calculation that ties them
//! together with an audit trail.

mod attendance_hours;
mod checked;
mod deductions;
mod leave_days;
mod pay_period;
mod payroll;
mod premium_pay;

pub use attendance_hours::{
    BREAK_HOURS, BREAK_THRESHOLD_HOURS, DAILY_OVERTIME_THRESHOLD_HOURS, compute_attendance_hours,
    compute_attendance_hours_from_str,
};
pub use deductions::{compute_deductions, compute_deductions_with_rates};
pub use leave_days::{
    DEFAULT_ANNUAL_LEAVE_DAYS, check_annual_leave, compute_leave_days,
    compute_leave_days_from_str,
};
pub use pay_period::{last_day_of_month, normalize_pay_period};
pub use payroll::{PayrollCalculation, calculate_payroll};
pub use premium_pay::{PremiumPay, compute_premium_pay};
