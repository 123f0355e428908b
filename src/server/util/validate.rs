//! Form-level field checks.
//!
//! The database only enforces not-null, foreign-key and unique constraints. Blank required
//! text, over-long text and out-of-range numbers are rejected here before a statement is
//! issued.

use sea_orm::prelude::Decimal;

use crate::server::error::validation::ValidationError;

/// Rejects blank values and values longer than `max` characters.
pub fn required_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    max_length(field, value, max)
}

/// Rejects blank values of unbounded text columns.
pub fn required_long_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(())
}

/// Rejects values longer than `max` characters. Blank values pass.
pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();

    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}

/// Like [`max_length`] for nullable columns.
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => max_length(field, value, max),
        None => Ok(()),
    }
}

/// Rejects integers outside `min..=max`.
pub fn in_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value: i64::from(value),
            min: i64::from(min),
            max: i64::from(max),
        });
    }

    Ok(())
}

/// Rounds a non-negative value to `decimal_places` and rejects it when the result needs more
/// than `max_digits` digits.
///
/// Returns the rounded value, which is what gets stored.
pub fn fixed_point(
    field: &'static str,
    value: Decimal,
    max_digits: u32,
    decimal_places: u32,
) -> Result<Decimal, ValidationError> {
    let rounded = value.round_dp(decimal_places);
    let min = Decimal::new(0, decimal_places);
    let max = Decimal::new(10i64.pow(max_digits) - 1, decimal_places);

    if rounded < min || rounded > max {
        return Err(ValidationError::DecimalOutOfRange {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }

    Ok(rounded)
}
