//! Statutory deduction calculation.
//!
//! This module derives gross pay, the six statutory deductions, and net pay
//! from a [`CompensationInput`]. Every figure is kept at full decimal
//! precision; rounding is a presentation concern handled by
//! [`DeductionBreakdown::rounded`].

use rust_decimal::Decimal;

use crate::config::DeductionRates;
use crate::error::EngineResult;
use crate::models::{AuditStep, CompensationInput, DeductionBreakdown};

use super::checked;

/// Computes the deduction breakdown using the statutory default rates.
///
/// # Errors
///
/// Returns [`EngineError::BaseSalaryRequired`](crate::error::EngineError::BaseSalaryRequired)
/// when the base salary is absent or zero,
/// [`EngineError::NegativeAmount`](crate::error::EngineError::NegativeAmount)
/// when any amount is negative, and
/// [`EngineError::AmountOutOfRange`](crate::error::EngineError::AmountOutOfRange)
/// when a figure overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_deductions;
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CompensationInput::new(Decimal::new(3_000_000, 0))
///     .with_allowances(Decimal::new(200_000, 0));
/// let result = compute_deductions(&input).unwrap();
///
/// assert_eq!(result.gross_pay, Decimal::new(3_200_000, 0));
/// assert_eq!(result.long_term_care, Decimal::from_str("13670.832").unwrap());
/// assert_eq!(result.net_pay, Decimal::from_str("2804409.168").unwrap());
/// ```
pub fn compute_deductions(input: &CompensationInput) -> EngineResult<DeductionBreakdown> {
    compute_deductions_with_rates(input, &DeductionRates::default())
}

/// Computes the deduction breakdown using an explicit rate table.
pub fn compute_deductions_with_rates(
    input: &CompensationInput,
    rates: &DeductionRates,
) -> EngineResult<DeductionBreakdown> {
    let base_salary = input.validate()?;
    let gross_pay = checked::sum(
        "gross_pay",
        &[base_salary, input.allowances_or_zero(), input.bonus_or_zero()],
    )?;
    apply_rates(gross_pay, rates)
}

/// Applies the deduction formula to an already-validated gross pay.
///
/// `local_tax` is chained off `income_tax` and `long_term_care` off
/// `health_insurance`; neither is a direct percentage of gross pay.
pub(crate) fn apply_rates(
    gross_pay: Decimal,
    rates: &DeductionRates,
) -> EngineResult<DeductionBreakdown> {
    let income_tax = checked::mul("income_tax", gross_pay, rates.income_tax)?;
    let local_tax = checked::mul("local_tax", income_tax, rates.local_tax)?;
    let national_pension = checked::mul("national_pension", gross_pay, rates.national_pension)?;
    let health_insurance = checked::mul("health_insurance", gross_pay, rates.health_insurance)?;
    let long_term_care = checked::mul("long_term_care", health_insurance, rates.long_term_care)?;
    let employment_insurance =
        checked::mul("employment_insurance", gross_pay, rates.employment_insurance)?;

    let total_deductions = checked::sum(
        "total_deductions",
        &[
            income_tax,
            local_tax,
            national_pension,
            health_insurance,
            long_term_care,
            employment_insurance,
        ],
    )?;

    Ok(DeductionBreakdown {
        gross_pay,
        income_tax,
        local_tax,
        national_pension,
        health_insurance,
        long_term_care,
        employment_insurance,
        total_deductions,
        net_pay: checked::sub("net_pay", gross_pay, total_deductions)?,
    })
}

/// Builds one audit step per deduction, numbered from `first_step`.
pub(crate) fn deduction_audit_steps(
    breakdown: &DeductionBreakdown,
    rates: &DeductionRates,
    first_step: u32,
) -> Vec<AuditStep> {
    let rows = [
        (
            "income_tax",
            "Income Tax",
            "gross_pay",
            breakdown.gross_pay,
            rates.income_tax,
            breakdown.income_tax,
        ),
        (
            "local_tax",
            "Local Income Tax",
            "income_tax",
            breakdown.income_tax,
            rates.local_tax,
            breakdown.local_tax,
        ),
        (
            "national_pension",
            "National Pension",
            "gross_pay",
            breakdown.gross_pay,
            rates.national_pension,
            breakdown.national_pension,
        ),
        (
            "health_insurance",
            "Health Insurance",
            "gross_pay",
            breakdown.gross_pay,
            rates.health_insurance,
            breakdown.health_insurance,
        ),
        (
            "long_term_care",
            "Long-Term Care Insurance",
            "health_insurance",
            breakdown.health_insurance,
            rates.long_term_care,
            breakdown.long_term_care,
        ),
        (
            "employment_insurance",
            "Employment Insurance",
            "gross_pay",
            breakdown.gross_pay,
            rates.employment_insurance,
            breakdown.employment_insurance,
        ),
    ];

    rows.into_iter()
        .zip(first_step..)
        .map(|((rule_id, rule_name, basis, amount, rate, result), step_number)| AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input: serde_json::json!({
                basis: amount.normalize().to_string(),
                "rate": rate.normalize().to_string()
            }),
            output: serde_json::json!({
                rule_id: result.normalize().to_string()
            }),
            reasoning: format!(
                "{} x {} = {}",
                amount.normalize(),
                rate.normalize(),
                result.normalize()
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_input() -> CompensationInput {
        CompensationInput::new(dec("3000000")).with_allowances(dec("200000"))
    }

    /// DD-001: reference breakdown
    #[test]
    fn test_reference_breakdown() {
        let result = compute_deductions(&reference_input()).unwrap();

        assert_eq!(result.gross_pay, dec("3200000"));
        assert_eq!(result.income_tax, dec("96000"));
        assert_eq!(result.local_tax, dec("9600"));
        assert_eq!(result.national_pension, dec("144000"));
        assert_eq!(result.health_insurance, dec("106720"));
        assert_eq!(result.long_term_care, dec("13670.832"));
        assert_eq!(result.employment_insurance, dec("25600"));
        assert_eq!(result.total_deductions, dec("395590.832"));
        assert_eq!(result.net_pay, dec("2804409.168"));
    }

    /// DD-002: zero base salary is rejected
    #[test]
    fn test_zero_base_salary_rejected() {
        let input = CompensationInput::new(Decimal::ZERO).with_allowances(dec("500000"));
        let err = compute_deductions(&input).unwrap_err();
        assert!(matches!(err, EngineError::BaseSalaryRequired));
        assert!(err.to_string().contains("base salary required"));
    }

    /// DD-003: absent base salary is rejected
    #[test]
    fn test_absent_base_salary_rejected() {
        let input = CompensationInput::default();
        assert!(matches!(
            compute_deductions(&input),
            Err(EngineError::BaseSalaryRequired)
        ));
    }

    /// DD-004: long-term care is chained off health insurance
    #[test]
    fn test_long_term_care_chained_off_health_insurance() {
        let result = compute_deductions(&CompensationInput::new(dec("1000000"))).unwrap();
        assert_eq!(result.health_insurance, dec("33350"));
        assert_eq!(result.long_term_care, dec("33350") * dec("0.1281"));
        assert_ne!(result.long_term_care, dec("1000000") * dec("0.1281"));
    }

    /// DD-005: bonus counts toward gross pay
    #[test]
    fn test_bonus_counts_toward_gross() {
        let input = CompensationInput::new(dec("2000000")).with_bonus(dec("1000000"));
        let result = compute_deductions(&input).unwrap();
        assert_eq!(result.gross_pay, dec("3000000"));
        assert_eq!(result.income_tax, dec("90000"));
    }

    #[test]
    fn test_custom_rates_are_applied() {
        let rates = DeductionRates {
            income_tax: dec("0.05"),
            ..DeductionRates::default()
        };
        let result = compute_deductions_with_rates(&CompensationInput::new(dec("1000000")), &rates)
            .unwrap();
        assert_eq!(result.income_tax, dec("50000"));
        assert_eq!(result.local_tax, dec("5000"));
    }

    #[test]
    fn test_rounded_reference_breakdown() {
        let rounded = compute_deductions(&reference_input()).unwrap().rounded();
        assert_eq!(rounded.long_term_care, dec("13671"));
        assert_eq!(rounded.total_deductions, dec("395591"));
        assert_eq!(rounded.net_pay, dec("2804409"));
    }

    #[test]
    fn test_audit_steps_cover_each_deduction() {
        let rates = DeductionRates::default();
        let breakdown = compute_deductions(&reference_input()).unwrap();
        let steps = deduction_audit_steps(&breakdown, &rates, 4);

        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].step_number, 4);
        assert_eq!(steps[5].step_number, 9);

        let ltc = &steps[4];
        assert_eq!(ltc.rule_id, "long_term_care");
        assert_eq!(ltc.input["health_insurance"], "106720");
        assert_eq!(ltc.input["rate"], "0.1281");
        assert_eq!(ltc.output["long_term_care"], "13670.832");
        assert_eq!(ltc.reasoning, "106720 x 0.1281 = 13670.832");
    }

    /// DD-006: amounts whose sum leaves the decimal range are rejected
    #[test]
    fn test_gross_overflow_rejected() {
        let huge = dec("70000000000000000000000000000");
        let input = CompensationInput::new(huge).with_allowances(huge);
        match compute_deductions(&input) {
            Err(EngineError::AmountOutOfRange { field }) => assert_eq!(field, "gross_pay"),
            other => panic!("Expected AmountOutOfRange, got {:?}", other),
        }
    }

    /// DD-007: the largest representable salary still computes
    #[test]
    fn test_maximum_salary_computes() {
        let result = compute_deductions(&CompensationInput::new(Decimal::MAX)).unwrap();
        assert_eq!(result.gross_pay, Decimal::MAX);
        assert_eq!(result.net_pay, result.gross_pay - result.total_deductions);
    }

    #[test]
    fn test_rate_above_one_can_overflow() {
        let rates = DeductionRates {
            income_tax: dec("2"),
            ..DeductionRates::default()
        };
        match compute_deductions_with_rates(&CompensationInput::new(Decimal::MAX), &rates) {
            Err(EngineError::AmountOutOfRange { field }) => assert_eq!(field, "income_tax"),
            other => panic!("Expected AmountOutOfRange, got {:?}", other),
        }
    }

    fn amount() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000_000_000).prop_map(|minor| Decimal::new(minor, 2))
    }

    proptest! {
        #[test]
        fn prop_net_pay_identity(base in 1i64..1_000_000_000, allowances in amount(), bonus in amount()) {
            let input = CompensationInput::new(Decimal::new(base, 0))
                .with_allowances(allowances)
                .with_bonus(bonus);
            let result = compute_deductions(&input).unwrap();

            prop_assert_eq!(result.net_pay, result.gross_pay - result.total_deductions);
            prop_assert!(result.total_deductions >= Decimal::ZERO);
            prop_assert!(result.net_pay <= result.gross_pay);
            prop_assert!(result.net_pay >= Decimal::ZERO);
        }

        #[test]
        fn prop_deterministic(base in 1i64..1_000_000_000, allowances in amount()) {
            let input = CompensationInput::new(Decimal::new(base, 0)).with_allowances(allowances);
            let first = compute_deductions(&input).unwrap();
            let second = compute_deductions(&input).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.net_pay.to_string(), second.net_pay.to_string());
        }
    }
}
