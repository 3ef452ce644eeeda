//! # schedule_core: Calendar Foundation for the Delivery Schedule Engine
//!
//! ## Foundation Layer Role
//!
//! schedule_core is the bottom layer of the workspace, providing:
//! - Calendar date type: `Date` (`types::time`)
//! - Weekday selection: `DeliveryWeekday`, `WeekdaySet` (`types::weekday`)
//! - Error types: `DateError` (`types::error`)
//! - Injected clock: `ClockProvider`, `SystemClock`, `FixedClock` (`clock`)
//!
//! ## Minimal Dependency Principle
//!
//! This layer depends on no other workspace crate and keeps external
//! dependencies small:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use schedule_core::types::{Date, DeliveryWeekday, WeekdaySet};
//!
//! let start = Date::from_ymd(2026, 2, 28).unwrap();
//! assert!(start.is_last_day_of_month());
//!
//! let weekdays: WeekdaySet = "mon,thu".parse().unwrap();
//! assert!(weekdays.contains(DeliveryWeekday::Thursday));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, DeliveryWeekday, WeekdaySet

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod clock;
pub mod types;
