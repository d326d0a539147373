//! Leave models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of leave an employee requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave, drawn from the yearly balance.
    Annual,
    /// Sick leave.
    Sick,
    /// Leave for personal reasons.
    Personal,
    /// Maternity leave.
    Maternity,
    /// Paternity or parental leave.
    Paternity,
}

impl LeaveType {
    /// Returns true if days taken are deducted from the annual balance.
    pub fn draws_annual_balance(&self) -> bool {
        matches!(self, LeaveType::Annual)
    }
}

/// An inclusive range of leave days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSpan {
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// Number of calendar days, counting both ends.
    pub days: u32,
}

/// An employee's annual leave entitlement for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Calendar year the balance applies to.
    pub year: i32,
    /// Days granted for the year.
    pub total_days: Decimal,
    /// Days already taken.
    pub used_days: Decimal,
    /// Days still available.
    pub remaining_days: Decimal,
}

impl LeaveBalance {
    /// Creates an untouched balance with `total_days` available.
    pub fn new(year: i32, total_days: Decimal) -> Self {
        Self {
            year,
            total_days,
            used_days: Decimal::ZERO,
            remaining_days: total_days,
        }
    }
}
