//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: the calendar month a payroll
//! record covers, as an inclusive start/end date pair.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The calendar month covered by a payroll record.
///
/// Build one from a `YYYY-MM` token with
/// [`normalize_pay_period`](crate::calculation::normalize_pay_period) or
/// through `str::parse`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period: PayPeriod = "2024-02".parse().unwrap();
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(period.days(), 29);
/// assert_eq!(period.token(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the month (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the month (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days in the period.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Renders the period back to its `YYYY-MM` token.
    pub fn token(&self) -> String {
        format!(
            "{:04}-{:02}",
            self.start_date.year(),
            self.start_date.month()
        )
    }
}
