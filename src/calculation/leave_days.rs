//! Leave day counting and annual leave balance checks.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveBalance, LeaveSpan, ensure_non_negative};

/// Annual leave days granted per year when no balance exists yet.
pub const DEFAULT_ANNUAL_LEAVE_DAYS: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Counts leave days between two dates, both ends included.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `end` is before `start`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_leave_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(compute_leave_days(start, end).unwrap(), 5);
/// assert_eq!(compute_leave_days(start, start).unwrap(), 1);
/// assert!(compute_leave_days(end, start).is_err());
/// ```
pub fn compute_leave_days(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::InvalidRange {
            field: "leave".to_string(),
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    let days = (end - start).num_days() + 1;
    u32::try_from(days).map_err(|_| EngineError::InvalidRange {
        field: "leave".to_string(),
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Parses two `YYYY-MM-DD` strings and counts the leave days between them.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] for an unparseable date and
/// [`EngineError::InvalidRange`] when the end precedes the start.
pub fn compute_leave_days_from_str(start: &str, end: &str) -> EngineResult<LeaveSpan> {
    let start_date = parse_date("start_date", start)?;
    let end_date = parse_date("end_date", end)?;
    let days = compute_leave_days(start_date, end_date)?;
    Ok(LeaveSpan {
        start_date,
        end_date,
        days,
    })
}

/// Checks a request against the annual leave balance.
///
/// Returns the days that would remain after the request is granted.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientLeaveBalance`] when more days are
/// requested than remain.
pub fn check_annual_leave(balance: &LeaveBalance, requested_days: Decimal) -> EngineResult<Decimal> {
    ensure_non_negative("requested_days", requested_days)?;
    if requested_days > balance.remaining_days {
        return Err(EngineError::InsufficientLeaveBalance {
            requested: requested_days,
            remaining: balance.remaining_days,
        });
    }
    Ok(balance.remaining_days - requested_days)
}

pub(crate) fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}
