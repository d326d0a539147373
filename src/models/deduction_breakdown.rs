//! Deduction breakdown model.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Gross pay, every statutory deduction, and net pay for one period.
///
/// Values are kept at full decimal precision. Use [`DeductionBreakdown::rounded`]
/// to obtain whole-won figures for display.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_deductions;
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::new(Decimal::new(3_000_000, 0))
///     .with_allowances(Decimal::new(200_000, 0));
/// let breakdown = compute_deductions(&input).unwrap();
///
/// assert_eq!(breakdown.net_pay, breakdown.gross_pay - breakdown.total_deductions);
/// assert_eq!(breakdown.rounded().long_term_care, Decimal::new(13_671, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Base salary plus allowances plus bonus.
    pub gross_pay: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// Local income tax, derived from the income tax.
    pub local_tax: Decimal,
    /// National pension contribution.
    pub national_pension: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Long-term-care premium, derived from the health insurance premium.
    pub long_term_care: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
    /// Sum of all six deductions.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
}

impl DeductionBreakdown {
    /// Rounds every field half-up to a whole currency unit.
    ///
    /// Each field is rounded independently, so the rounded total may differ
    /// by one unit from the sum of the rounded deductions.
    pub fn rounded(&self) -> Self {
        Self {
            gross_pay: round_won(self.gross_pay),
            income_tax: round_won(self.income_tax),
            local_tax: round_won(self.local_tax),
            national_pension: round_won(self.national_pension),
            health_insurance: round_won(self.health_insurance),
            long_term_care: round_won(self.long_term_care),
            employment_insurance: round_won(self.employment_insurance),
            total_deductions: round_won(self.total_deductions),
            net_pay: round_won(self.net_pay),
        }
    }
}

/// Rounds half away from zero to zero decimal places.
pub fn round_won(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
