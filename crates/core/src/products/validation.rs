//! Product field validation

use rust_decimal::Decimal;
use thiserror::Error;

/// Fractional digits kept for prices.
pub const PRICE_SCALE: u32 = 2;

/// Total significant digits allowed for prices.
pub const PRICE_MAX_DIGITS: u32 = 10;

/// Fractional digits kept for weights.
pub const WEIGHT_SCALE: u32 = 3;

/// Total significant digits allowed for weights.
pub const WEIGHT_MAX_DIGITS: u32 = 8;

/// Maximum length of text fields such as titles and names.
pub const MAX_TEXT_LEN: usize = 255;

/// Errors raised when a catalog write carries invalid data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace.
    #[error("{field} must not be blank")]
    Blank {
        /// Field name
        field: &'static str,
    },

    /// A text field exceeded [`MAX_TEXT_LEN`] characters.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Maximum allowed characters
        max: usize,
    },

    /// A decimal field was negative.
    #[error("{field} must not be negative")]
    Negative {
        /// Field name
        field: &'static str,
    },

    /// A decimal field carried more fractional digits than its column allows.
    #[error("{field} must have at most {scale} decimal places")]
    TooManyDecimalPlaces {
        /// Field name
        field: &'static str,
        /// Allowed fractional digits
        scale: u32,
    },

    /// A decimal field had more significant digits than its column allows.
    #[error("{field} must have at most {max_digits} digits")]
    TooManyDigits {
        /// Field name
        field: &'static str,
        /// Allowed significant digits
        max_digits: u32,
    },

    /// A count field (pages, tracks) was zero.
    #[error("{field} must be positive")]
    NotPositive {
        /// Field name
        field: &'static str,
    },

    /// A software license was given a non-zero weight.
    #[error("software licenses must not have weight")]
    LicenseWeight,
}

/// Validate a required text field, returning it trimmed.
pub(crate) fn text(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }

    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Validate a positive count.
pub(crate) fn positive(field: &'static str, value: u32) -> Result<u32, ValidationError> {
    if value == 0 {
        return Err(ValidationError::NotPositive { field });
    }

    Ok(value)
}

/// Validate a price and normalise it to [`PRICE_SCALE`] fractional digits.
pub(crate) fn price(value: Decimal) -> Result<Decimal, ValidationError> {
    fixed_point("price", value, PRICE_SCALE, PRICE_MAX_DIGITS)
}

/// Validate an optional weight and normalise it to [`WEIGHT_SCALE`] fractional digits.
pub(crate) fn weight(value: Option<Decimal>) -> Result<Option<Decimal>, ValidationError> {
    value
        .map(|weight| fixed_point("weight", weight, WEIGHT_SCALE, WEIGHT_MAX_DIGITS))
        .transpose()
}

fn fixed_point(
    field: &'static str,
    value: Decimal,
    scale: u32,
    max_digits: u32,
) -> Result<Decimal, ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative { field });
    }

    if value.normalize().scale() > scale {
        return Err(ValidationError::TooManyDecimalPlaces { field, scale });
    }

    let limit = Decimal::from(10_u64.pow(max_digits - scale));

    if value.trunc() >= limit {
        return Err(ValidationError::TooManyDigits { field, max_digits });
    }

    let mut normalised = value.abs();
    normalised.rescale(scale);

    Ok(normalised)
}
