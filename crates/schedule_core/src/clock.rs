//! Injected source of "today".
//!
//! The schedule engine never reads the system clock itself. Anything that
//! needs the current calendar day takes a [`ClockProvider`], so tests can pin
//! the date with [`FixedClock`] instead of patching global state.
//!
//! # Examples
//!
//! ```
//! use schedule_core::clock::{minimum_start_date, FixedClock};
//! use schedule_core::types::Date;
//!
//! let clock = FixedClock::new(Date::from_ymd(2026, 1, 31).unwrap());
//! assert_eq!(minimum_start_date(&clock), Date::from_ymd(2026, 2, 1).unwrap());
//! ```

use chrono::Local;

use crate::types::time::Date;

/// Capability to read the caller's current local calendar day.
pub trait ClockProvider: Send + Sync {
    /// Returns today's date in the caller's local calendar.
    fn today(&self) -> Date;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockProvider for SystemClock {
    fn today(&self) -> Date {
        let today = Local::now().date_naive();
        // The system clock is assumed to sit inside the supported year range.
        Date::try_from(today).expect("system clock year within supported range")
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Date);

impl FixedClock {
    /// Creates a clock that always reports `today`.
    pub fn new(today: Date) -> Self {
        FixedClock(today)
    }
}

impl ClockProvider for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// Earliest start date a new subscription may use: tomorrow.
pub fn minimum_start_date(clock: &dyn ClockProvider) -> Date {
    clock.today().succ()
}
