//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing and weekday lookup

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `YearOutOfRange`: Year outside the supported calendar range
/// - `ParseError`: Failed to parse date or weekday string
/// - `WeekdayOutOfRange`: Weekday ordinal outside Sunday=0 … Saturday=6
///
/// # Examples
/// ```
/// use schedule_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2026, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2026-2-30");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Year outside the supported calendar range.
    #[error("Year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// Requested year
        year: i32,
        /// Smallest supported year
        min: i32,
        /// Largest supported year
        max: i32,
    },

    /// Failed to parse a date or weekday string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Weekday ordinal outside Sunday=0 … Saturday=6.
    #[error("Weekday ordinal {ordinal} is out of range (expected 0-6, Sunday=0)")]
    WeekdayOutOfRange {
        /// The rejected ordinal
        ordinal: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2026,
            month: 4,
            day: 31,
        };
        assert_eq!(err.to_string(), "Invalid date: 2026-4-31");
    }

    #[test]
    fn test_weekday_out_of_range_display() {
        let err = DateError::WeekdayOutOfRange { ordinal: 7 };
        assert!(err.to_string().contains("ordinal 7"));
    }

    #[test]
    fn test_year_out_of_range_display() {
        let err = DateError::YearOutOfRange {
            year: 10_000,
            min: 1,
            max: 9999,
        };
        assert_eq!(
            err.to_string(),
            "Year 10000 is outside the supported range 1..=9999"
        );
    }

    #[test]
    fn test_clone_and_eq() {
        let err = DateError::ParseError("bad".to_string());
        assert_eq!(err.clone(), err);
    }
}
