//! Boundary validation for area conversions
//!
//! The conversion core trusts its input. Anything arriving from a form or a
//! wire payload goes through these checked wrappers first, which reject bad
//! units and non-finite or negative amounts with a tagged error.

use thiserror::Error;

use super::converter::{aggregate, convert, AreaValue};
use super::units::Unit;

/// Area validation error types
#[derive(Debug, Error, PartialEq)]
pub enum AreaError {
    #[error("unsupported area unit: {0:?}")]
    InvalidUnit(String),

    #[error("invalid area amount: {0}")]
    InvalidAmount(f64),
}

/// Result type for validated area operations
pub type AreaResult<T> = Result<T, AreaError>;

/// Parse a unit string, rejecting anything outside the supported set
pub fn parse_unit(s: &str) -> AreaResult<Unit> {
    Unit::from_str(s).ok_or_else(|| AreaError::InvalidUnit(s.to_string()))
}

fn check_amount(amount: f64) -> AreaResult<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(AreaError::InvalidAmount(amount));
    }
    Ok(amount)
}

/// Convert after validating the amount
pub fn checked_convert(amount: f64, from: Unit, to: Unit) -> AreaResult<f64> {
    Ok(convert(check_amount(amount)?, from, to))
}

/// Aggregate after validating every entry amount
pub fn checked_aggregate(entries: &[AreaValue], target: Unit) -> AreaResult<f64> {
    for entry in entries {
        check_amount(entry.amount)?;
    }
    Ok(aggregate(entries, target))
}
