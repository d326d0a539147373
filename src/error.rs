//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine reports back to its caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Validation variants describe input a caller can correct and resubmit.
/// Configuration variants describe a broken deployment.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod {
///     token: "2024-13".to_string(),
/// };
/// assert_eq!(error.to_string(), "Validation error: invalid period '2024-13'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Base salary was missing or zero.
    #[error("Validation error: base salary required")]
    BaseSalaryRequired,

    /// A monetary or hour amount was negative.
    #[error("Validation error: '{field}' must not be negative (got {value})")]
    NegativeAmount {
        /// The offending field.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// An amount, or a figure derived from it, exceeds what can be represented.
    #[error("Validation error: '{field}' is out of range")]
    AmountOutOfRange {
        /// The input or derived figure that overflowed.
        field: String,
    },

    /// A pay period token did not parse into a year and a month 1-12.
    #[error("Validation error: invalid period '{token}'")]
    InvalidPeriod {
        /// The token as supplied.
        token: String,
    },

    /// A date or time string could not be parsed.
    #[error("Validation error: invalid {field} '{value}'")]
    InvalidDate {
        /// Which input the value was supplied for.
        field: String,
        /// The raw value.
        value: String,
    },

    /// A range ended before it started.
    #[error("Validation error: {field} end {end} is before start {start}")]
    InvalidRange {
        /// Which range was inverted (e.g. "leave", "attendance").
        field: String,
        /// The start of the range as supplied.
        start: String,
        /// The end of the range as supplied.
        end: String,
    },

    /// Annual leave request exceeds the remaining balance.
    #[error(
        "Validation error: insufficient annual leave balance ({requested} requested, {remaining} remaining)"
    )]
    InsufficientLeaveBalance {
        /// Days requested.
        requested: Decimal,
        /// Days still available this year.
        remaining: Decimal,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No deduction rate table is effective on the given date.
    #[error("No deduction rates effective on {date}")]
    RatesNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },
}

impl EngineError {
    /// Returns true for errors caused by caller input rather than deployment.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            EngineError::ConfigNotFound { .. }
                | EngineError::ConfigParseError { .. }
                | EngineError::RatesNotFound { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_salary_required_message() {
        let error = EngineError::BaseSalaryRequired;
        assert_eq!(error.to_string(), "Validation error: base salary required");
    }

    #[test]
    fn test_invalid_period_displays_token() {
        let error = EngineError::InvalidPeriod {
            token: "2024-13".to_string(),
        };
        assert_eq!(error.to_string(), "Validation error: invalid period '2024-13'");
    }

    #[test]
    fn test_invalid_date_displays_field_and_value() {
        let error = EngineError::InvalidDate {
            field: "start_date".to_string(),
            value: "2025-02-30".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation error: invalid start_date '2025-02-30'"
        );
    }

    #[test]
    fn test_invalid_range_displays_both_ends() {
        let error = EngineError::InvalidRange {
            field: "leave".to_string(),
            start: "2025-01-05".to_string(),
            end: "2025-01-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation error: leave end 2025-01-01 is before start 2025-01-05"
        );
    }

    #[test]
    fn test_negative_amount_displays_value() {
        let error = EngineError::NegativeAmount {
            field: "bonus".to_string(),
            value: Decimal::new(-100, 0),
        };
        assert_eq!(
            error.to_string(),
            "Validation error: 'bonus' must not be negative (got -100)"
        );
    }

    #[test]
    fn test_amount_out_of_range_names_field() {
        let error = EngineError::AmountOutOfRange {
            field: "gross_pay".to_string(),
        };
        assert_eq!(error.to_string(), "Validation error: 'gross_pay' is out of range");
        assert!(error.is_validation());
    }

    #[test]
    fn test_rates_not_found_displays_date() {
        let error = EngineError::RatesNotFound {
            date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        };
        assert_eq!(error.to_string(), "No deduction rates effective on 2019-01-01");
    }

    #[test]
    fn test_is_validation_splits_input_from_config_errors() {
        assert!(EngineError::BaseSalaryRequired.is_validation());
        assert!(
            EngineError::InsufficientLeaveBalance {
                requested: Decimal::new(5, 0),
                remaining: Decimal::new(3, 0),
            }
            .is_validation()
        );
        assert!(
            !EngineError::ConfigNotFound {
                path: "/missing".to_string(),
            }
            .is_validation()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_salary() -> EngineResult<()> {
            Err(EngineError::BaseSalaryRequired)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_salary()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
