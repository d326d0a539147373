//! Full monthly payroll calculation.
//!
//! Combines pay period normalization, premium pay, and the statutory
//! deduction formula into a [`PayrollRecord`], recording an audit step for
//! every rule applied.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditWarning, DeductionBreakdown, PayrollRecord, PayrollRequest,
    ensure_non_negative,
};

use super::checked;
use super::deductions::{apply_rates, deduction_audit_steps};
use super::pay_period::normalize_pay_period;
use super::premium_pay::{PremiumPay, compute_premium_pay, minimum_wage_warning, premium_audit_step};

/// Everything produced by [`calculate_payroll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollCalculation {
    /// The record to submit to the payroll service.
    pub record: PayrollRecord,
    /// Statutory deductions over the full gross pay.
    pub breakdown: DeductionBreakdown,
    /// Overtime and holiday pricing.
    pub premium: PremiumPay,
    /// One step per rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Conditions worth a reviewer's attention.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates a monthly payroll record.
///
/// The rate table is the one effective on the first day of the pay period.
/// Gross pay is base salary plus allowances, bonus, overtime pay and holiday
/// pay. The statutory deductions apply to that gross; `other_deductions` is
/// added to the total afterwards.
///
/// # Errors
///
/// Fails on an invalid period token, a missing or zero base salary, any
/// negative amount, or when no rate table covers the period.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::PayrollRequest;
/// use rust_decimal::Decimal;
///
/// let request: PayrollRequest = serde_json::from_str(r#"{
///     "employee_id": 1,
///     "pay_period": "2025-07",
///     "base_salary": "3000000",
///     "allowances": "200000"
/// }"#).unwrap();
///
/// let result = calculate_payroll(&request, &PayrollConfig::statutory_default()).unwrap();
/// assert_eq!(result.record.gross_pay, Decimal::new(3_200_000, 0));
/// assert_eq!(result.record.pay_period_end.to_string(), "2025-07-31");
/// ```
pub fn calculate_payroll(
    request: &PayrollRequest,
    config: &PayrollConfig,
) -> EngineResult<PayrollCalculation> {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let period = normalize_pay_period(&request.pay_period)?;
    let table = config.rates_for(period.start_date)?;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "pay_period".to_string(),
        rule_name: "Pay Period Normalization".to_string(),
        input: serde_json::json!({ "token": request.pay_period }),
        output: serde_json::json!({
            "start_date": period.start_date.to_string(),
            "end_date": period.end_date.to_string(),
            "rates_effective_date": table.effective_date.to_string()
        }),
        reasoning: format!(
            "{} covers {} to {} using rates effective {}",
            period.token(),
            period.start_date,
            period.end_date,
            table.effective_date
        ),
    });
    step_number += 1;

    let compensation = request.compensation();
    let base_salary = compensation.validate()?;
    let allowances = compensation.allowances_or_zero();
    let bonus = compensation.bonus_or_zero();
    let other_deductions = request.other_deductions.unwrap_or(Decimal::ZERO);
    ensure_non_negative("other_deductions", other_deductions)?;

    let premium = compute_premium_pay(
        base_salary,
        request.overtime_hours.unwrap_or(Decimal::ZERO),
        request.holiday_hours.unwrap_or(Decimal::ZERO),
        &table.premiums,
    )?;
    audit_steps.push(premium_audit_step(
        &premium,
        base_salary,
        &table.premiums,
        step_number,
    ));
    step_number += 1;
    if premium.minimum_wage_applied && premium.total() > Decimal::ZERO {
        warnings.push(minimum_wage_warning(&table.premiums));
    }

    let gross_pay = checked::sum(
        "gross_pay",
        &[base_salary, allowances, bonus, premium.total()],
    )?;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "allowances": allowances.normalize().to_string(),
            "bonus": bonus.normalize().to_string(),
            "premium_pay": premium.total().normalize().to_string()
        }),
        output: serde_json::json!({ "gross_pay": gross_pay.normalize().to_string() }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            base_salary.normalize(),
            allowances.normalize(),
            bonus.normalize(),
            premium.total().normalize(),
            gross_pay.normalize()
        ),
    });
    step_number += 1;

    let breakdown = apply_rates(gross_pay, &table.deductions)?;
    let steps = deduction_audit_steps(&breakdown, &table.deductions, step_number);
    step_number += steps.len() as u32;
    audit_steps.extend(steps);

    let total_deductions =
        checked::add("total_deductions", breakdown.total_deductions, other_deductions)?;
    let net_pay = checked::sub("net_pay", gross_pay, total_deductions)?;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "statutory_deductions": breakdown.total_deductions.normalize().to_string(),
            "other_deductions": other_deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.normalize().to_string(),
            "net_pay": net_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} - ({} + {}) = {}",
            gross_pay.normalize(),
            breakdown.total_deductions.normalize(),
            other_deductions.normalize(),
            net_pay.normalize()
        ),
    });

    if net_pay.is_sign_negative() && !net_pay.is_zero() {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_PAY".to_string(),
            message: format!(
                "Deductions of {} exceed gross pay of {}",
                total_deductions.normalize(),
                gross_pay.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    let record = PayrollRecord {
        employee_id: request.employee_id,
        pay_period_start: period.start_date,
        pay_period_end: period.end_date,
        base_salary,
        allowances,
        bonus,
        overtime_hours: premium.overtime_hours,
        overtime_pay: premium.overtime_pay,
        holiday_hours: premium.holiday_hours,
        holiday_pay: premium.holiday_pay,
        other_deductions,
        gross_pay,
        income_tax: breakdown.income_tax,
        local_tax: breakdown.local_tax,
        national_pension: breakdown.national_pension,
        health_insurance: breakdown.health_insurance,
        long_term_care: breakdown.long_term_care,
        employment_insurance: breakdown.employment_insurance,
        total_deductions,
        net_pay,
    };

    Ok(PayrollCalculation {
        record,
        breakdown,
        premium,
        audit_steps,
        warnings,
    })
}
