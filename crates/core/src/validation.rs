//! Shared field checks used by the input models' `validate` methods.

use rust_decimal::Decimal;

use crate::errors::ValidationError;
use crate::{Error, Result};

pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::OutOfRange {
            field,
            constraint: "greater than 0",
        }));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::OutOfRange {
            field,
            constraint: "greater than or equal to 0",
        }));
    }
    Ok(())
}
