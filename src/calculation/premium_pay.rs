//! Overtime and holiday premium pay.
//!
//! The hourly wage is derived from the monthly base salary over a standard
//! month of 22 working days at 8 hours, and is never allowed to fall below
//! the statutory minimum hourly wage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PremiumRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, ensure_non_negative};

use super::checked;

/// Premium pay derived for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumPay {
    /// Hourly wage used for both premiums.
    pub hourly_wage: Decimal,
    /// Whether the minimum wage floor replaced the derived wage.
    pub minimum_wage_applied: bool,
    /// Overtime hours priced.
    pub overtime_hours: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Holiday hours priced.
    pub holiday_hours: Decimal,
    /// Pay for holiday hours.
    pub holiday_pay: Decimal,
}

impl PremiumPay {
    /// Overtime pay plus holiday pay.
    ///
    /// Saturates at `Decimal::MAX`; [`compute_premium_pay`] never produces a
    /// premium whose total does not fit.
    pub fn total(&self) -> Decimal {
        self.overtime_pay.saturating_add(self.holiday_pay)
    }
}

/// Prices overtime and holiday hours for a monthly base salary.
///
/// # Errors
///
/// Returns [`EngineError::NegativeAmount`] for negative hours or salary, and
/// [`EngineError::AmountOutOfRange`] if the configured month has no hours to
/// spread the salary over or a premium overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_premium_pay;
/// use payroll_engine::config::PremiumRates;
/// use rust_decimal::Decimal;
///
/// let premium = compute_premium_pay(
///     Decimal::new(3_520_000, 0),
///     Decimal::new(4, 0),
///     Decimal::ZERO,
///     &PremiumRates::default(),
/// )
/// .unwrap();
///
/// assert_eq!(premium.hourly_wage, Decimal::new(20_000, 0));
/// assert_eq!(premium.overtime_pay, Decimal::new(120_000, 0));
/// assert!(!premium.minimum_wage_applied);
/// ```
pub fn compute_premium_pay(
    base_salary: Decimal,
    overtime_hours: Decimal,
    holiday_hours: Decimal,
    rates: &PremiumRates,
) -> EngineResult<PremiumPay> {
    ensure_non_negative("base_salary", base_salary)?;
    ensure_non_negative("overtime_hours", overtime_hours)?;
    ensure_non_negative("holiday_hours", holiday_hours)?;

    let derived = base_salary
        .checked_div(rates.monthly_working_hours)
        .ok_or_else(|| EngineError::AmountOutOfRange {
            field: "monthly_working_hours".to_string(),
        })?;
    let (hourly_wage, minimum_wage_applied) = if derived < rates.minimum_hourly_wage {
        (rates.minimum_hourly_wage, true)
    } else {
        (derived, false)
    };

    let overtime_pay = checked::mul(
        "overtime_pay",
        checked::mul("overtime_pay", overtime_hours, hourly_wage)?,
        rates.overtime_multiplier,
    )?;
    let holiday_pay = checked::mul(
        "holiday_pay",
        checked::mul("holiday_pay", holiday_hours, hourly_wage)?,
        rates.holiday_multiplier,
    )?;
    checked::add("premium_pay", overtime_pay, holiday_pay)?;

    Ok(PremiumPay {
        hourly_wage,
        minimum_wage_applied,
        overtime_hours,
        overtime_pay,
        holiday_hours,
        holiday_pay,
    })
}

/// Records how the premium was priced.
pub(crate) fn premium_audit_step(
    premium: &PremiumPay,
    base_salary: Decimal,
    rates: &PremiumRates,
    step_number: u32,
) -> AuditStep {
    let wage_note = if premium.minimum_wage_applied {
        format!(
            "hourly wage raised to minimum wage {}",
            rates.minimum_hourly_wage.normalize()
        )
    } else {
        format!(
            "hourly wage {} / {} = {}",
            base_salary.normalize(),
            rates.monthly_working_hours.normalize(),
            premium.hourly_wage.round_dp(2).normalize()
        )
    };

    AuditStep {
        step_number,
        rule_id: "premium_pay".to_string(),
        rule_name: "Overtime and Holiday Premium".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "overtime_hours": premium.overtime_hours.normalize().to_string(),
            "holiday_hours": premium.holiday_hours.normalize().to_string(),
            "overtime_multiplier": rates.overtime_multiplier.normalize().to_string(),
            "holiday_multiplier": rates.holiday_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_wage": premium.hourly_wage.normalize().to_string(),
            "minimum_wage_applied": premium.minimum_wage_applied,
            "overtime_pay": premium.overtime_pay.normalize().to_string(),
            "holiday_pay": premium.holiday_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{}; overtime {}h x {}, holiday {}h x {}",
            wage_note,
            premium.overtime_hours.normalize(),
            rates.overtime_multiplier.normalize(),
            premium.holiday_hours.normalize(),
            rates.holiday_multiplier.normalize()
        ),
    }
}

/// Warning emitted when the minimum wage floor was applied.
pub(crate) fn minimum_wage_warning(rates: &PremiumRates) -> AuditWarning {
    AuditWarning {
        code: "MINIMUM_WAGE_FLOOR".to_string(),
        message: format!(
            "Derived hourly wage is below the minimum wage; premiums priced at {}",
            rates.minimum_hourly_wage.normalize()
        ),
        severity: "medium".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PR-001: wage derived from salary
    #[test]
    fn test_hourly_wage_derived_from_salary() {
        let premium =
            compute_premium_pay(dec("3520000"), dec("2"), dec("3"), &PremiumRates::default())
                .unwrap();
        assert_eq!(premium.hourly_wage, dec("20000"));
        assert_eq!(premium.overtime_pay, dec("60000"));
        assert_eq!(premium.holiday_pay, dec("120000"));
        assert_eq!(premium.total(), dec("180000"));
    }

    /// PR-002: minimum wage floor
    #[test]
    fn test_minimum_wage_floor() {
        let premium =
            compute_premium_pay(dec("1000000"), dec("10"), Decimal::ZERO, &PremiumRates::default())
                .unwrap();
        assert!(premium.minimum_wage_applied);
        assert_eq!(premium.hourly_wage, dec("9860"));
        assert_eq!(premium.overtime_pay, dec("147900"));
    }

    /// PR-003: no hours, no premium
    #[test]
    fn test_no_hours_no_premium() {
        let premium = compute_premium_pay(
            dec("3000000"),
            Decimal::ZERO,
            Decimal::ZERO,
            &PremiumRates::default(),
        )
        .unwrap();
        assert_eq!(premium.total(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_hours_rejected() {
        let result =
            compute_premium_pay(dec("3000000"), dec("-1"), Decimal::ZERO, &PremiumRates::default());
        match result {
            Err(EngineError::NegativeAmount { field, .. }) => assert_eq!(field, "overtime_hours"),
            other => panic!("Expected NegativeAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_monthly_hours_rejected() {
        let rates = PremiumRates {
            monthly_working_hours: Decimal::ZERO,
            ..PremiumRates::default()
        };
        match compute_premium_pay(dec("3000000"), dec("1"), Decimal::ZERO, &rates) {
            Err(EngineError::AmountOutOfRange { field }) => {
                assert_eq!(field, "monthly_working_hours")
            }
            other => panic!("Expected AmountOutOfRange, got {:?}", other),
        }
    }

    /// PR-004: overtime hours large enough to overflow the pay
    #[test]
    fn test_huge_overtime_hours_rejected() {
        let result = compute_premium_pay(
            dec("3000000"),
            dec("70000000000000000000000000"),
            Decimal::ZERO,
            &PremiumRates::default(),
        );
        match result {
            Err(EngineError::AmountOutOfRange { field }) => assert_eq!(field, "overtime_pay"),
            other => panic!("Expected AmountOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_premium_total_must_fit() {
        let rates = PremiumRates {
            minimum_hourly_wage: Decimal::ONE,
            overtime_multiplier: Decimal::ONE,
            holiday_multiplier: Decimal::ONE,
            ..PremiumRates::default()
        };
        let result =
            compute_premium_pay(Decimal::new(176, 0), Decimal::MAX, Decimal::MAX, &rates);
        match result {
            Err(EngineError::AmountOutOfRange { field }) => assert_eq!(field, "premium_pay"),
            other => panic!("Expected AmountOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_step_mentions_floor() {
        let rates = PremiumRates::default();
        let premium = compute_premium_pay(dec("1000000"), dec("1"), Decimal::ZERO, &rates).unwrap();
        let step = premium_audit_step(&premium, dec("1000000"), &rates, 2);

        assert_eq!(step.step_number, 2);
        assert_eq!(step.rule_id, "premium_pay");
        assert_eq!(step.output["minimum_wage_applied"], true);
        assert!(step.reasoning.contains("minimum wage 9860"));
        assert!(minimum_wage_warning(&rates).message.contains("9860"));
    }
}
