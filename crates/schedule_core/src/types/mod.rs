//! Calendar and weekday types.
//!
//! This module provides:
//! - `time`: The `Date` calendar type and its month arithmetic
//! - `weekday`: `DeliveryWeekday` and `WeekdaySet` for custom delivery patterns
//! - `error`: Structured `DateError` for construction and parsing failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`MIN_YEAR`], [`MAX_YEAR`] from `time`
//! - [`DeliveryWeekday`], [`WeekdaySet`] from `weekday`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;
pub mod weekday;

// Re-export commonly used types at module level
pub use error::DateError;
pub use time::{Date, MAX_YEAR, MIN_YEAR};
pub use weekday::{DeliveryWeekday, WeekdaySet};
