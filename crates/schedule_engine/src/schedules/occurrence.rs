//! Delivery occurrence enumeration.

use std::iter::FusedIterator;

use schedule_core::types::Date;

use super::frequency::DeliveryFrequency;
use super::period::BillingPeriod;

/// Lazy, ascending sequence of delivery dates within a billing period.
///
/// The sequence walks the period one calendar day at a time and yields the
/// days the frequency selects. It holds no reference to the period, so it can
/// outlive it; cloning it yields an independent cursor at the same position.
///
/// # Examples
///
/// ```
/// use schedule_engine::schedules::{enumerate_occurrences, resolve_period, DeliveryFrequency};
/// use schedule_core::types::Date;
///
/// let period = resolve_period(Date::from_ymd(2026, 1, 26).unwrap());
/// let dates: Vec<String> = enumerate_occurrences(&period, &DeliveryFrequency::AlternateDays)
///     .map(|date| date.to_string())
///     .collect();
///
/// assert_eq!(dates, vec!["2026-01-26", "2026-01-28", "2026-01-30"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrences {
    frequency: DeliveryFrequency,
    effective_start: Date,
    effective_end: Date,
    /// Next day to examine; `None` once the period is exhausted.
    cursor: Option<Date>,
}

impl Occurrences {
    /// Returns the frequency driving this sequence.
    pub fn frequency(&self) -> &DeliveryFrequency {
        &self.frequency
    }

    fn advance(&mut self, current: Date) {
        self.cursor = (current < self.effective_end).then(|| current.succ());
    }
}

impl Iterator for Occurrences {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        while let Some(current) = self.cursor {
            self.advance(current);
            if self
                .frequency
                .is_delivery_day(current, self.effective_start)
            {
                return Some(current);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Some(current) => {
                let remaining = (self.effective_end - current + 1) as usize;
                (0, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Occurrences {}

/// Enumerates the delivery dates of `period` under `frequency`.
///
/// - `Daily`: every day of the period.
/// - `AlternateDays`: day offsets 0, 2, 4, … from the period's effective
///   start, so a rolled-over period starts its alternation on day 1 of the
///   new month.
/// - `CustomDays`: every day whose weekday is selected; an empty selection
///   yields nothing.
///
/// Every yielded date lies within the period, in ascending order. Calling this
/// again restarts the sequence from the beginning.
pub fn enumerate_occurrences(period: &BillingPeriod, frequency: &DeliveryFrequency) -> Occurrences {
    let cursor = match frequency {
        DeliveryFrequency::CustomDays(weekdays) if weekdays.is_empty() => None,
        _ => Some(period.effective_start()),
    };
    Occurrences {
        frequency: *frequency,
        effective_start: period.effective_start(),
        effective_end: period.effective_end(),
        cursor,
    }
}

/// Returns the first delivery date on or after `date` within the period.
///
/// Returns `None` when no delivery remains in the period from `date` onward.
///
/// # Examples
///
/// ```
/// use schedule_engine::schedules::{next_occurrence_on_or_after, resolve_period, DeliveryFrequency};
/// use schedule_core::types::Date;
///
/// let period = resolve_period(Date::from_ymd(2026, 1, 15).unwrap());
/// let freq = DeliveryFrequency::AlternateDays;
///
/// let next = next_occurrence_on_or_after(&period, &freq, Date::from_ymd(2026, 1, 20).unwrap());
/// assert_eq!(next, Some(Date::from_ymd(2026, 1, 21).unwrap()));
///
/// let none = next_occurrence_on_or_after(&period, &freq, Date::from_ymd(2026, 2, 1).unwrap());
/// assert_eq!(none, None);
/// ```
pub fn next_occurrence_on_or_after(
    period: &BillingPeriod,
    frequency: &DeliveryFrequency,
    date: Date,
) -> Option<Date> {
    enumerate_occurrences(period, frequency).find(|occurrence| *occurrence >= date)
}
