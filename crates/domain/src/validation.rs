// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Promotion;
use time::OffsetDateTime;

/// Validates that a promotion name is present.
///
/// # Errors
///
/// Returns `DomainError::EmptyName` if the name is empty or whitespace only.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName);
    }
    Ok(())
}

/// Validates that a discount rate is finite and within `(0, 1]`.
///
/// # Errors
///
/// Returns `DomainError::InvalidDiscountRate` otherwise.
pub fn validate_discount_rate(value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidDiscountRate { value })
    }
}

/// Validates that a promotion window ends strictly after it starts.
///
/// # Errors
///
/// Returns `DomainError::InvalidWindow` if `end_at <= start_at`.
pub fn validate_window(start_at: OffsetDateTime, end_at: OffsetDateTime) -> Result<(), DomainError> {
    // Rule: a zero-length window is rejected as well
    if end_at <= start_at {
        return Err(DomainError::InvalidWindow { start_at, end_at });
    }
    Ok(())
}

/// Validates every field-level invariant of a promotion.
///
/// # Errors
///
/// Returns the first violated rule, checking the name, then the discount
/// rate, then the window.
pub fn validate_promotion(promotion: &Promotion) -> Result<(), DomainError> {
    validate_name(&promotion.name)?;
    validate_discount_rate(promotion.discount_rate.value())?;
    validate_window(promotion.start_at, promotion.end_at)?;
    Ok(())
}
