//! Calendar date type for delivery scheduling.
//!
//! This module provides:
//! - `Date`: Type-safe calendar date wrapper around chrono::NaiveDate
//! - Month arithmetic used by the billing period rules (month length,
//!   last-day detection, first day of the following month)
//!
//! Dates carry no time of day and no timezone: a `Date` is the caller's
//! local calendar day.
//!
//! # Examples
//!
//! ```
//! use schedule_core::types::time::Date;
//!
//! let date = Date::from_ymd(2026, 1, 31).unwrap();
//! assert!(date.is_last_day_of_month());
//! assert_eq!(date.first_day_of_next_month(), Date::from_ymd(2026, 2, 1).unwrap());
//! assert_eq!(date.month_name(), "January");
//! ```

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;
use super::weekday::DeliveryWeekday;

/// Smallest year accepted by [`Date::from_ymd`] and [`Date::parse`].
pub const MIN_YEAR: i32 = 1;

/// Largest year accepted by [`Date::from_ymd`] and [`Date::parse`].
pub const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Type-safe calendar date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the calendar arithmetic needed by the
/// delivery schedule engine. Construction is limited to years
/// [`MIN_YEAR`]..=[`MAX_YEAR`]; dates derived by month arithmetic may step
/// one month past that range, which chrono represents without loss.
///
/// # Examples
///
/// ```
/// use schedule_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2026, 6, 15).unwrap();
/// assert_eq!(date.year(), 2026);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2026-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2026, 1, 1).unwrap();
/// let end = Date::from_ymd(2026, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "NaiveDate", into = "NaiveDate"))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year ([`MIN_YEAR`]..=[`MAX_YEAR`])
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_core::types::time::Date;
    ///
    /// // Leap year February 29th
    /// assert!(Date::from_ymd(2028, 2, 29).is_ok());
    ///
    /// // Non-leap year February 29th
    /// assert!(Date::from_ymd(2026, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateError::InvalidDate { year, month, day })?;
        Self::try_from(date)
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_core::types::time::Date;
    ///
    /// let date = Date::parse("2026-03-01").unwrap();
    /// assert_eq!(date.day(), 1);
    ///
    /// assert!(Date::parse("01/03/2026").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))?;
        Self::try_from(date)
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_core::types::time::Date;
    /// use schedule_core::types::weekday::DeliveryWeekday;
    ///
    /// let date = Date::from_ymd(2026, 1, 15).unwrap();
    /// assert_eq!(date.weekday(), DeliveryWeekday::Thursday);
    /// ```
    pub fn weekday(&self) -> DeliveryWeekday {
        self.0.weekday().into()
    }

    /// Returns the English name of the month.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0()]
    }

    /// Number of days in this date's month, respecting leap years.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2026, 2, 10).unwrap().days_in_month(), 28);
    /// assert_eq!(Date::from_ymd(2028, 2, 10).unwrap().days_in_month(), 29);
    /// assert_eq!(Date::from_ymd(2026, 4, 10).unwrap().days_in_month(), 30);
    /// ```
    pub fn days_in_month(&self) -> u32 {
        self.last_day_of_month().day()
    }

    /// Returns the last calendar day of this date's month.
    pub fn last_day_of_month(&self) -> Date {
        let first_of_next = self.first_day_of_next_month().0;
        Date(first_of_next - Days::new(1))
    }

    /// Returns whether this date is the last calendar day of its month.
    pub fn is_last_day_of_month(&self) -> bool {
        // The next day belongs to another month only at month end.
        self.succ().month() != self.month()
    }

    /// Returns the first day of this date's month.
    pub fn first_day_of_month(&self) -> Date {
        Date(self.0 - Days::new(u64::from(self.day() - 1)))
    }

    /// Returns day 1 of the month following this date's month.
    ///
    /// December rolls into January of the next year.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_core::types::time::Date;
    ///
    /// let new_year = Date::from_ymd(2026, 12, 31).unwrap().first_day_of_next_month();
    /// assert_eq!(new_year, Date::from_ymd(2027, 1, 1).unwrap());
    /// ```
    pub fn first_day_of_next_month(&self) -> Date {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        // Years are bounded by MAX_YEAR + 1 here, far inside chrono's range.
        Date(
            NaiveDate::from_ymd_opt(year, month, 1)
                .expect("first day of a month within chrono's range is always valid"),
        )
    }

    /// Returns the following calendar day.
    #[inline]
    pub fn succ(&self) -> Date {
        self.add_days(1)
    }

    /// Returns the date `days` calendar days later.
    #[inline]
    pub fn add_days(&self, days: u32) -> Date {
        Date(self.0 + Days::new(u64::from(days)))
    }

    #[inline]
    fn month0(&self) -> usize {
        self.0.month0() as usize
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = date.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        Ok(Date(date))
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
