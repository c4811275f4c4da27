//! Money calculation utilities using rust_decimal for precision
//!
//! All report arithmetic is done in `Decimal` internally, then converted
//! to `f64` for storage/serialization.

use rust_decimal::prelude::*;

use crate::utils::{AppError, AppResult};

/// Rounding for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed monetary amount per field
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Validate a monetary amount from a payload
///
/// Must be finite, non-negative and within [`MAX_AMOUNT`].
pub fn validate_amount(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        let sum_f64 = a + b;

        // f64 fails
        assert_ne!(sum_f64, 0.3);

        // Decimal succeeds
        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(to_f64(to_decimal(2.345)), 2.35);
        assert_eq!(to_f64(to_decimal(-2.345)), -2.35);
        assert_eq!(to_f64(to_decimal(2.344)), 2.34);
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0, "adSpend").is_ok());
        assert!(validate_amount(4000.0, "doorRevenue").is_ok());

        assert!(validate_amount(-1.0, "adSpend").is_err());
        assert!(validate_amount(f64::NAN, "adSpend").is_err());
        assert!(validate_amount(f64::INFINITY, "adSpend").is_err());
        assert!(validate_amount(2_000_000.0, "doorRevenue").is_err());
    }
}
