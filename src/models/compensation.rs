//! Compensation input models.
//!
//! [`CompensationInput`] carries the three amounts the statutory deduction
//! formula consumes. It is built by the presentation layer (or deserialized
//! from a request body) and handed to the calculator as-is.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Monthly compensation amounts entered for one employee.
///
/// `allowances` and `bonus` are optional and count as zero when absent or
/// non-numeric. `base_salary` is optional only so that a missing or
/// non-numeric value can be reported as a validation error instead of a
/// deserialization failure.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::new(Decimal::new(3_000_000, 0))
///     .with_allowances(Decimal::new(200_000, 0));
///
/// assert_eq!(input.allowances_or_zero(), Decimal::new(200_000, 0));
/// assert_eq!(input.bonus_or_zero(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Monthly base salary.
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_salary: Option<Decimal>,
    /// Fixed allowances paid on top of the base salary.
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowances: Option<Decimal>,
    /// One-off bonus for the period.
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub bonus: Option<Decimal>,
}

impl CompensationInput {
    /// Creates an input with the given base salary and no extras.
    pub fn new(base_salary: Decimal) -> Self {
        Self {
            base_salary: Some(base_salary),
            allowances: None,
            bonus: None,
        }
    }

    /// Sets the allowances.
    pub fn with_allowances(mut self, allowances: Decimal) -> Self {
        self.allowances = Some(allowances);
        self
    }

    /// Sets the bonus.
    pub fn with_bonus(mut self, bonus: Decimal) -> Self {
        self.bonus = Some(bonus);
        self
    }

    /// Returns the allowances, treating an absent value as zero.
    pub fn allowances_or_zero(&self) -> Decimal {
        self.allowances.unwrap_or(Decimal::ZERO)
    }

    /// Returns the bonus, treating an absent value as zero.
    pub fn bonus_or_zero(&self) -> Decimal {
        self.bonus.unwrap_or(Decimal::ZERO)
    }

    /// Checks the input and returns the base salary.
    ///
    /// Fails with [`EngineError::BaseSalaryRequired`] when the base salary is
    /// absent or zero, and with [`EngineError::NegativeAmount`] when any amount
    /// is negative.
    pub fn validate(&self) -> EngineResult<Decimal> {
        let base_salary = match self.base_salary {
            Some(value) if !value.is_zero() => value,
            _ => return Err(EngineError::BaseSalaryRequired),
        };
        ensure_non_negative("base_salary", base_salary)?;
        ensure_non_negative("allowances", self.allowances_or_zero())?;
        ensure_non_negative("bonus", self.bonus_or_zero())?;
        Ok(base_salary)
    }
}

/// Rejects negative amounts.
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Reads an optional amount the way form input is read: numbers and numeric
/// strings become values, while `null`, empty or non-numeric strings and
/// booleans become `None`.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientAmountVisitor)
}

struct LenientAmountVisitor;

impl<'de> Visitor<'de> for LenientAmountVisitor {
    type Value = Option<Decimal>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a string, or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Decimal::try_from(value).ok())
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let trimmed = value.trim();
        Ok(Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_all_fields() {
        let json = r#"{"base_salary": 3000000, "allowances": "200000", "bonus": 50000}"#;
        let input: CompensationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.base_salary, Some(Decimal::new(3_000_000, 0)));
        assert_eq!(input.allowances_or_zero(), Decimal::new(200_000, 0));
        assert_eq!(input.bonus_or_zero(), Decimal::new(50_000, 0));
    }

    #[test]
    fn test_missing_and_null_extras_default_to_zero() {
        let json = r#"{"base_salary": "2500000", "bonus": null}"#;
        let input: CompensationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.allowances_or_zero(), Decimal::ZERO);
        assert_eq!(input.bonus_or_zero(), Decimal::ZERO);
    }

    /// CI-001: non-numeric extras count as zero
    #[test]
    fn test_non_numeric_extras_default_to_zero() {
        let json = r#"{"base_salary": "3000000", "allowances": "abc", "bonus": ""}"#;
        let input: CompensationInput = serde_json::from_str(json).unwrap();
        assert!(input.allowances.is_none());
        assert!(input.bonus.is_none());
        assert_eq!(input.validate().unwrap(), Decimal::new(3_000_000, 0));
    }

    /// CI-002: non-numeric base salary is reported as missing
    #[test]
    fn test_non_numeric_base_salary_is_missing() {
        let json = r#"{"base_salary": "three million", "allowances": true}"#;
        let input: CompensationInput = serde_json::from_str(json).unwrap();
        assert!(input.base_salary.is_none());
        assert!(matches!(
            input.validate(),
            Err(EngineError::BaseSalaryRequired)
        ));
    }

    #[test]
    fn test_lenient_amounts_accept_padding_and_fractions() {
        let json = r#"{"base_salary": " 2500000 ", "allowances": 1500.5, "bonus": "1e3"}"#;
        let input: CompensationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.base_salary, Some(Decimal::new(2_500_000, 0)));
        assert_eq!(input.allowances, Some(Decimal::new(15005, 1)));
        assert_eq!(input.bonus, Some(Decimal::new(1000, 0)));
    }

    #[test]
    fn test_validate_missing_base_salary() {
        let input: CompensationInput = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            input.validate(),
            Err(EngineError::BaseSalaryRequired)
        ));
    }

    #[test]
    fn test_validate_zero_base_salary() {
        let input = CompensationInput::new(Decimal::ZERO);
        assert!(matches!(
            input.validate(),
            Err(EngineError::BaseSalaryRequired)
        ));
    }

    #[test]
    fn test_validate_negative_bonus() {
        let input = CompensationInput::new(Decimal::new(1_000_000, 0)).with_bonus(Decimal::new(-1, 0));
        match input.validate() {
            Err(EngineError::NegativeAmount { field, .. }) => assert_eq!(field, "bonus"),
            other => panic!("Expected NegativeAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_returns_base_salary() {
        let input = CompensationInput::new(Decimal::new(1_500_000, 0));
        assert_eq!(input.validate().unwrap(), Decimal::new(1_500_000, 0));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let input = CompensationInput::new(Decimal::new(100, 0));
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"base_salary":"100"}"#);
    }
}
