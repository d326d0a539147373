//! Pay period normalization.
//!
//! Turns a `YYYY-MM` token into the first and last calendar day of that
//! month.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::PayPeriod;

/// Normalizes a `YYYY-MM` token into a [`PayPeriod`].
///
/// The end date is the last day of the month, leap years included.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] if the token is not a four-digit
/// year, a dash, and a month between 1 and 12.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::normalize_pay_period;
/// use chrono::NaiveDate;
///
/// let leap = normalize_pay_period("2024-02").unwrap();
/// assert_eq!(leap.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// let common = normalize_pay_period("2023-02").unwrap();
/// assert_eq!(common.end_date, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
///
/// assert!(normalize_pay_period("2024-13").is_err());
/// ```
pub fn normalize_pay_period(token: &str) -> EngineResult<PayPeriod> {
    let invalid = || EngineError::InvalidPeriod {
        token: token.to_string(),
    };

    let trimmed = token.trim();
    let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || !(1..=2).contains(&month.len()) {
        return Err(invalid());
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end_date = last_day_of_month(year, month).ok_or_else(invalid)?;

    Ok(PayPeriod {
        start_date,
        end_date,
    })
}

/// Returns the last calendar day of the given month.
///
/// Steps to the first day of the following month and back one day.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

impl FromStr for PayPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_pay_period(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// NP-001: leap February
    #[test]
    fn test_leap_february() {
        let period = normalize_pay_period("2024-02").unwrap();
        assert_eq!(period.start_date, date(2024, 2, 1));
        assert_eq!(period.end_date, date(2024, 2, 29));
    }

    /// NP-002: common February
    #[test]
    fn test_common_february() {
        let period = normalize_pay_period("2023-02").unwrap();
        assert_eq!(period.end_date, date(2023, 2, 28));
    }

    /// NP-003: century rule
    #[test]
    fn test_century_years() {
        assert_eq!(normalize_pay_period("1900-02").unwrap().end_date, date(1900, 2, 28));
        assert_eq!(normalize_pay_period("2000-02").unwrap().end_date, date(2000, 2, 29));
    }

    /// NP-004: 30 and 31 day months
    #[test]
    fn test_month_lengths() {
        assert_eq!(normalize_pay_period("2025-04").unwrap().end_date, date(2025, 4, 30));
        assert_eq!(normalize_pay_period("2025-07").unwrap().end_date, date(2025, 7, 31));
        assert_eq!(normalize_pay_period("2025-12").unwrap().end_date, date(2025, 12, 31));
    }

    /// NP-005: month 13 rejected
    #[test]
    fn test_month_13_rejected() {
        match normalize_pay_period("2024-13") {
            Err(EngineError::InvalidPeriod { token }) => assert_eq!(token, "2024-13"),
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        for token in ["", "2024", "2024-00", "24-01", "2024-1a", "2024/01", "2024-01-01", "abcd-01", "2024--1"] {
            assert!(
                normalize_pay_period(token).is_err(),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_single_digit_month_accepted() {
        let period = normalize_pay_period("2025-3").unwrap();
        assert_eq!(period.start_date, date(2025, 3, 1));
        assert_eq!(period.token(), "2025-03");
    }

    #[test]
    fn test_from_str_delegates() {
        let period: PayPeriod = "2025-11".parse().unwrap();
        assert_eq!(period.end_date, date(2025, 11, 30));
        assert!("nope".parse::<PayPeriod>().is_err());
    }
}
