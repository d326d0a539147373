//! Attendance hour derivation from clock-in and clock-out times.
//!
//! A day longer than six hours carries one unpaid break hour. Hours worked
//! beyond eight after the break are overtime.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceHours;

/// Elapsed hours beyond which a break is deducted.
pub const BREAK_THRESHOLD_HOURS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Length of the deducted break.
pub const BREAK_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Worked hours per day before overtime starts.
pub const DAILY_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Derives worked and overtime hours for one day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] unless `clock_out` is after
/// `clock_in`. Shifts crossing midnight are not supported.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_attendance_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let hours = compute_attendance_hours(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(hours.total_hours, Decimal::new(10, 0));
/// assert_eq!(hours.overtime_hours, Decimal::new(2, 0));
/// ```
pub fn compute_attendance_hours(
    clock_in: NaiveTime,
    clock_out: NaiveTime,
) -> EngineResult<AttendanceHours> {
    if clock_out <= clock_in {
        return Err(EngineError::InvalidRange {
            field: "attendance".to_string(),
            start: clock_in.to_string(),
            end: clock_out.to_string(),
        });
    }

    let seconds = (clock_out - clock_in).num_seconds();
    let elapsed_hours = Decimal::from(seconds) / SECONDS_PER_HOUR;

    let break_hours = if elapsed_hours > BREAK_THRESHOLD_HOURS {
        BREAK_HOURS
    } else {
        Decimal::ZERO
    };
    let total_hours = elapsed_hours - break_hours;
    let overtime_hours = (total_hours - DAILY_OVERTIME_THRESHOLD_HOURS).max(Decimal::ZERO);

    Ok(AttendanceHours {
        elapsed_hours,
        break_hours,
        total_hours,
        overtime_hours,
    })
}

/// Parses `HH:MM:SS` (or `HH:MM`) strings and derives the day's hours.
pub fn compute_attendance_hours_from_str(
    clock_in: &str,
    clock_out: &str,
) -> EngineResult<AttendanceHours> {
    let clock_in = parse_time("clock_in", clock_in)?;
    let clock_out = parse_time("clock_out", clock_out)?;
    compute_attendance_hours(clock_in, clock_out)
}

fn parse_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| EngineError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        })
}
