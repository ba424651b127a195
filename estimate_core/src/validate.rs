//! # Input Validation
//!
//! Range checks that gate every calculator entry point. A value is valid
//! iff it is a finite real number within `[min, max]`. Counts must be
//! strictly positive integers.
//!
//! Front ends parse loosely (a blank field becomes `NaN`), so `NaN` must
//! be rejected here rather than crash an estimator downstream.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::validate;
//!
//! assert!(validate::is_valid(3.0, 1.0, f64::INFINITY));
//! assert!(!validate::is_valid(f64::NAN, 0.0, f64::INFINITY));
//!
//! let length = validate::require("length_m", 4.0, 0.0, f64::INFINITY).unwrap();
//! assert_eq!(length, 4.0);
//! ```

use crate::errors::{EstimateError, EstimateResult};

/// Check that `value` is a finite number with `min <= value <= max`.
pub fn is_valid(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// Check a value against the default range `[0, +inf)`.
pub fn is_valid_non_negative(value: f64) -> bool {
    is_valid(value, 0.0, f64::INFINITY)
}

/// Validate a numeric field, returning it on success.
///
/// On failure returns [`EstimateError::InvalidInput`] naming the field,
/// so the caller can re-prompt. No estimator runs past a failed check.
pub fn require(field: &str, value: f64, min: f64, max: f64) -> EstimateResult<f64> {
    if !value.is_finite() {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value < min || value > max {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(value)
}

/// Validate a non-negative geometric field (length, area, thickness).
pub fn require_non_negative(field: &str, value: f64) -> EstimateResult<f64> {
    require(field, value, 0.0, f64::INFINITY)
}

/// Validate a piece count: a strictly positive integer.
pub fn require_count(field: &str, count: u32) -> EstimateResult<u32> {
    if count < 1 {
        return Err(EstimateError::invalid_input(
            field,
            count.to_string(),
            "Count must be at least 1",
        ));
    }
    Ok(count)
}
