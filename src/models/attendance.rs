//! Attendance hour model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours derived from a single day's clock-in and clock-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceHours {
    /// Time between clock-in and clock-out.
    pub elapsed_hours: Decimal,
    /// Unpaid break deducted from the elapsed time.
    pub break_hours: Decimal,
    /// Hours worked after the break deduction.
    pub total_hours: Decimal,
    /// Worked hours beyond the daily threshold.
    pub overtime_hours: Decimal,
}
