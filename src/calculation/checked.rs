//! Overflow-checked decimal arithmetic.
//!
//! `Decimal` operators panic when a result leaves the representable range.
//! These helpers turn that into [`EngineError::AmountOutOfRange`] naming the
//! figure being computed.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

fn out_of_range(field: &str) -> EngineError {
    EngineError::AmountOutOfRange {
        field: field.to_string(),
    }
}

pub(crate) fn add(field: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| out_of_range(field))
}

pub(crate) fn sub(field: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| out_of_range(field))
}

pub(crate) fn mul(field: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| out_of_range(field))
}

/// Sums `values`, failing on the first overflow.
pub(crate) fn sum(field: &str, values: &[Decimal]) -> EngineResult<Decimal> {
    values
        .iter()
        .try_fold(Decimal::ZERO, |total, value| add(field, total, *value))
}
