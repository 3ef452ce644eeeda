//! Schedule evaluation error types.

use rust_decimal::Decimal;
use schedule_core::types::{Date, DateError};
use thiserror::Error;

/// Errors that can occur while evaluating a delivery schedule.
///
/// Every variant is a caller contract violation: the engine performs no I/O,
/// so there is nothing to retry and nothing is clamped or defaulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Quantity, price or frequency input failed validation.
    #[error("Invalid schedule input: {reason}")]
    InvalidScheduleInput {
        /// Description of the rejected input.
        reason: String,
    },

    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Start date is earlier than the first date a subscription may begin.
    #[error("Start date {start} is before the earliest allowed start date {minimum}")]
    StartDateTooEarly {
        /// The requested start date.
        start: Date,
        /// The earliest allowed start date.
        minimum: Date,
    },
}

impl ScheduleError {
    /// Returns whether this error is an `InvalidScheduleInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScheduleError::InvalidScheduleInput { .. })
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ScheduleError::InvalidScheduleInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn non_positive_quantity(quantity: i64) -> Self {
        Self::invalid(format!(
            "quantity per delivery must be positive, got {}",
            quantity
        ))
    }

    pub(crate) fn negative_unit_price(unit_price: Decimal) -> Self {
        Self::invalid(format!(
            "unit price must not be negative, got {}",
            unit_price
        ))
    }
}

impl From<DateError> for ScheduleError {
    fn from(err: DateError) -> Self {
        ScheduleError::invalid(err.to_string())
    }
}
