//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the jurisdiction whose rules are loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code for the jurisdiction (e.g., "KR").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// ISO currency code all amounts are expressed in.
    pub currency: String,
}

/// Statutory deduction rates.
///
/// Each rate is a fraction, not a percentage. `local_tax` applies to the
/// income tax amount and `long_term_care` applies to the health insurance
/// amount; every other rate applies to gross pay.
///
/// # Example
///
/// ```
/// use payroll_engine::config::DeductionRates;
/// use rust_decimal::Decimal;
///
/// let rates = DeductionRates::default();
/// assert_eq!(rates.national_pension, Decimal::new(45, 3));
/// assert_eq!(rates.long_term_care, Decimal::new(1281, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRates {
    /// Income tax as a fraction of gross pay.
    pub income_tax: Decimal,
    /// Local income tax as a fraction of income tax.
    pub local_tax: Decimal,
    /// National pension as a fraction of gross pay.
    pub national_pension: Decimal,
    /// Health insurance as a fraction of gross pay.
    pub health_insurance: Decimal,
    /// Long-term-care premium as a fraction of health insurance.
    pub long_term_care: Decimal,
    /// Employment insurance as a fraction of gross pay.
    pub employment_insurance: Decimal,
}

impl Default for DeductionRates {
    fn default() -> Self {
        Self {
            income_tax: Decimal::new(3, 2),
            local_tax: Decimal::new(10, 2),
            national_pension: Decimal::new(45, 3),
            health_insurance: Decimal::new(3335, 5),
            long_term_care: Decimal::new(1281, 4),
            employment_insurance: Decimal::new(8, 3),
        }
    }
}

impl DeductionRates {
    /// Rejects negative rates.
    pub fn validate(&self) -> EngineResult<()> {
        let named = [
            ("income_tax", self.income_tax),
            ("local_tax", self.local_tax),
            ("national_pension", self.national_pension),
            ("health_insurance", self.health_insurance),
            ("long_term_care", self.long_term_care),
            ("employment_insurance", self.employment_insurance),
        ];
        for (field, value) in named {
            if value.is_sign_negative() {
                return Err(EngineError::NegativeAmount {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Rates used to price overtime and holiday work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumRates {
    /// Multiplier applied to the hourly wage for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Multiplier applied to the hourly wage for holiday hours.
    pub holiday_multiplier: Decimal,
    /// Hours in a standard month (22 working days of 8 hours).
    pub monthly_working_hours: Decimal,
    /// Statutory minimum hourly wage; the derived hourly wage never drops below it.
    pub minimum_hourly_wage: Decimal,
}

impl Default for PremiumRates {
    fn default() -> Self {
        Self {
            overtime_multiplier: Decimal::new(15, 1),
            holiday_multiplier: Decimal::new(2, 0),
            monthly_working_hours: Decimal::new(176, 0),
            minimum_hourly_wage: Decimal::new(9860, 0),
        }
    }
}

impl PremiumRates {
    /// Rejects negative multipliers or wages and a month without hours.
    pub fn validate(&self) -> EngineResult<()> {
        let named = [
            ("overtime_multiplier", self.overtime_multiplier),
            ("holiday_multiplier", self.holiday_multiplier),
            ("minimum_hourly_wage", self.minimum_hourly_wage),
        ];
        for (field, value) in named {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::NegativeAmount {
                    field: field.to_string(),
                    value,
                });
            }
        }
        if self.monthly_working_hours <= Decimal::ZERO {
            return Err(EngineError::AmountOutOfRange {
                field: "monthly_working_hours".to_string(),
            });
        }
        Ok(())
    }
}

/// A rate table effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The first date these rates apply to.
    pub effective_date: NaiveDate,
    /// Statutory deduction rates.
    pub deductions: DeductionRates,
    /// Premium pay rates.
    #[serde(default)]
    pub premiums: PremiumRates,
}

/// The complete payroll configuration.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: JurisdictionMetadata,
    /// Sorted by effective date, oldest first.
    rate_tables: Vec<RateTable>,
}

impl PayrollConfig {
    /// Creates a configuration, ordering the rate tables by effective date.
    pub fn new(metadata: JurisdictionMetadata, mut rate_tables: Vec<RateTable>) -> Self {
        rate_tables.sort_by_key(|table| table.effective_date);
        Self {
            metadata,
            rate_tables,
        }
    }

    /// A configuration holding only the built-in statutory rates, effective
    /// for every date.
    pub fn statutory_default() -> Self {
        Self::new(
            JurisdictionMetadata {
                code: "KR".to_string(),
                name: "Korean statutory payroll deductions (simplified)".to_string(),
                currency: "KRW".to_string(),
            },
            vec![RateTable {
                effective_date: NaiveDate::MIN,
                deductions: DeductionRates::default(),
                premiums: PremiumRates::default(),
            }],
        )
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns every loaded rate table, oldest first.
    pub fn rate_tables(&self) -> &[RateTable] {
        &self.rate_tables
    }

    /// Returns the rate table with the latest effective date, if any.
    pub fn latest_rates(&self) -> Option<&RateTable> {
        self.rate_tables.last()
    }

    /// Returns the latest rate table effective on or before `date`.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.rate_tables
            .iter()
            .rev()
            .find(|table| table.effective_date <= date)
            .ok_or(EngineError::RatesNotFound { date })
    }
}
