//! Billing period resolution.

use std::fmt;

use schedule_core::types::Date;

use super::frequency::DeliveryFrequency;
use super::occurrence::{enumerate_occurrences, Occurrences};

/// The calendar-month window over which deliveries are counted and billed.
///
/// A period always ends on the last day of its month and never crosses a
/// month boundary. Values are produced by [`resolve_period`] and are never
/// mutated.
///
/// # Examples
///
/// ```
/// use schedule_engine::schedules::resolve_period;
/// use schedule_core::types::Date;
///
/// let period = resolve_period(Date::from_ymd(2026, 1, 15).unwrap());
///
/// assert_eq!(period.effective_start(), Date::from_ymd(2026, 1, 15).unwrap());
/// assert_eq!(period.effective_end(), Date::from_ymd(2026, 1, 31).unwrap());
/// assert_eq!(period.label(), "Rest of January");
/// assert!(!period.rolled_to_next_month());
/// assert_eq!(period.days_in_period(), 17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BillingPeriod {
    /// First billed day (inclusive).
    effective_start: Date,
    /// Last billed day (inclusive), always the last day of the month.
    effective_end: Date,
    /// Human-readable label for summary screens.
    label: String,
    /// Whether the raw start date was pushed into the following month.
    rolled_to_next_month: bool,
}

impl BillingPeriod {
    /// Returns the first billed day (inclusive).
    #[inline]
    pub fn effective_start(&self) -> Date {
        self.effective_start
    }

    /// Returns the last billed day (inclusive).
    #[inline]
    pub fn effective_end(&self) -> Date {
        self.effective_end
    }

    /// Returns the human-readable label, e.g. "Rest of January" or
    /// "Full Month (February)".
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns whether the month-end rollover rule moved the period.
    #[inline]
    pub fn rolled_to_next_month(&self) -> bool {
        self.rolled_to_next_month
    }

    /// Number of calendar days in the period, both ends inclusive.
    ///
    /// Always at least 1.
    #[inline]
    pub fn days_in_period(&self) -> u32 {
        // Bounded by the month length, so the cast cannot truncate.
        (self.effective_end - self.effective_start + 1) as u32
    }

    /// Returns whether a date falls within the period (inclusive).
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.effective_start && date <= self.effective_end
    }

    /// Enumerates the delivery dates of this period for a frequency.
    ///
    /// Each call returns a fresh sequence starting at the first occurrence.
    pub fn occurrences(&self, frequency: &DeliveryFrequency) -> Occurrences {
        enumerate_occurrences(self, frequency)
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} to {}",
            self.label, self.effective_start, self.effective_end
        )
    }
}

/// Resolves the effective billing period for a subscription start date.
///
/// A start date on the last day of its month rolls the whole period into the
/// following month (December rolls into January of the next year). Any other
/// start date bills from itself to the end of its own month.
///
/// # Examples
///
/// ```
/// use schedule_engine::schedules::resolve_period;
/// use schedule_core::types::Date;
///
/// let period = resolve_period(Date::from_ymd(2026, 12, 31).unwrap());
///
/// assert!(period.rolled_to_next_month());
/// assert_eq!(period.effective_start(), Date::from_ymd(2027, 1, 1).unwrap());
/// assert_eq!(period.effective_end(), Date::from_ymd(2027, 1, 31).unwrap());
/// assert_eq!(period.label(), "Full Month (January)");
/// ```
pub fn resolve_period(start_date: Date) -> BillingPeriod {
    if start_date.is_last_day_of_month() {
        let effective_start = start_date.first_day_of_next_month();
        BillingPeriod {
            effective_start,
            effective_end: effective_start.last_day_of_month(),
            label: format!("Full Month ({})", effective_start.month_name()),
            rolled_to_next_month: true,
        }
    } else {
        BillingPeriod {
            effective_start: start_date,
            effective_end: start_date.last_day_of_month(),
            label: format!("Rest of {}", start_date.month_name()),
            rolled_to_next_month: false,
        }
    }
}
