//! Recurring delivery schedule and billing period engine.
//!
//! This module provides:
//! - [`resolve_period`] / [`BillingPeriod`]: Effective billing period with the month-end rollover rule
//! - [`DeliveryFrequency`]: Daily, alternate-day or custom-weekday recurrence
//! - [`enumerate_occurrences`] / [`Occurrences`]: Lazy delivery-date sequence within a period
//! - [`aggregate`] / [`ScheduleSummary`]: Delivery count and decimal cost for a period
//! - [`evaluate`] and [`DeliveryScheduleBuilder`]: The full pipeline for embedding layers
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use schedule_engine::schedules::{DeliveryFrequency, DeliveryScheduleBuilder};
//! use schedule_core::types::Date;
//!
//! let schedule = DeliveryScheduleBuilder::new()
//!     .start(Date::from_ymd(2026, 1, 15).unwrap())
//!     .frequency(DeliveryFrequency::AlternateDays)
//!     .quantity(2)
//!     .unit_price(Decimal::new(10, 0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schedule.summary().total_deliveries(), 9); // 15, 17, …, 31
//! assert_eq!(schedule.summary().total_amount(), Decimal::new(180, 0));
//! ```

mod billing;
mod error;
mod frequency;
mod occurrence;
mod period;
mod schedule;

pub use billing::{aggregate, validate_billing_inputs, ScheduleSummary};
pub use error::ScheduleError;
pub use frequency::DeliveryFrequency;
pub use occurrence::{enumerate_occurrences, next_occurrence_on_or_after, Occurrences};
pub use period::{resolve_period, BillingPeriod};
pub use schedule::{
    check_start_date, evaluate, DeliverySchedule, DeliveryScheduleBuilder, ScheduleQuote,
    ScheduleRequest,
};
