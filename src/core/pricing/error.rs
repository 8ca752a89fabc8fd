use std::fmt;

use thiserror::Error;

/// Booking input that fails a pricing precondition.
///
/// Carries the offending field in the same camelCase spelling the booking
/// payloads use (`basePrice`, `extras[1].price`, ...), so callers can point
/// the user at the exact input to correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct InvalidInputError {
    pub field: String,
    pub reason: String,
}

impl InvalidInputError {
    pub fn new(field: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}
