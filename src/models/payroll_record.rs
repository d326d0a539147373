//! Payroll request and record models.
//!
//! [`PayrollRequest`] holds the raw inputs for one employee and month.
//! [`PayrollRecord`] is the fully computed record submitted to the external
//! payroll API. The record carries every derived figure, so the receiving
//! server stores it without recomputing anything.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompensationInput, lenient_amount};

/// Raw inputs for a monthly payroll calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollRequest;
///
/// let request: PayrollRequest = serde_json::from_str(r#"{
///     "employee_id": 7,
///     "pay_period": "2025-07",
///     "base_salary": "3000000",
///     "overtime_hours": "4"
/// }"#).unwrap();
///
/// assert_eq!(request.employee_id, 7);
/// assert!(request.compensation().bonus.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Identifier of the employee in the external system.
    pub employee_id: i64,
    /// Pay period token in `YYYY-MM` form.
    pub pay_period: String,
    /// Monthly base salary.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub base_salary: Option<Decimal>,
    /// Fixed allowances.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub allowances: Option<Decimal>,
    /// One-off bonus.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub bonus: Option<Decimal>,
    /// Overtime hours worked in the period.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Hours worked on holidays in the period.
    #[serde(default)]
    pub holiday_hours: Option<Decimal>,
    /// Non-statutory deductions (loans, union dues and similar).
    #[serde(default)]
    pub other_deductions: Option<Decimal>,
}

impl PayrollRequest {
    /// The compensation amounts as a [`CompensationInput`].
    pub fn compensation(&self) -> CompensationInput {
        CompensationInput {
            base_salary: self.base_salary,
            allowances: self.allowances,
            bonus: self.bonus,
        }
    }
}

/// A computed payroll record for one employee and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Identifier of the employee in the external system.
    pub employee_id: i64,
    /// First day of the pay period.
    pub pay_period_start: NaiveDate,
    /// Last day of the pay period.
    pub pay_period_end: NaiveDate,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Fixed allowances.
    pub allowances: Decimal,
    /// One-off bonus.
    pub bonus: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Holiday hours worked.
    pub holiday_hours: Decimal,
    /// Pay for holiday hours.
    pub holiday_pay: Decimal,
    /// Non-statutory deductions.
    pub other_deductions: Decimal,
    /// Total pay before deductions.
    pub gross_pay: Decimal,
    /// Income tax.
    pub income_tax: Decimal,
    /// Local income tax.
    pub local_tax: Decimal,
    /// National pension contribution.
    pub national_pension: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Long-term-care premium.
    pub long_term_care: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
    /// Statutory deductions plus other deductions.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
}
