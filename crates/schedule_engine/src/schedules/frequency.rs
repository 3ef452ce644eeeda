//! Delivery frequency enumeration.

use std::fmt;
use std::str::FromStr;

use schedule_core::types::{Date, WeekdaySet};

use super::error::ScheduleError;

/// Recurrence pattern deciding which days of a billing period get a delivery.
///
/// # Examples
///
/// ```
/// use schedule_engine::schedules::DeliveryFrequency;
/// use schedule_core::types::{Date, WeekdaySet};
///
/// let start = Date::from_ymd(2026, 1, 15).unwrap();
///
/// assert!(DeliveryFrequency::AlternateDays.is_delivery_day(start, start));
/// assert!(!DeliveryFrequency::AlternateDays.is_delivery_day(start.succ(), start));
///
/// let thursdays = DeliveryFrequency::CustomDays("thu".parse::<WeekdaySet>().unwrap());
/// assert!(thursdays.is_delivery_day(start, start)); // 2026-01-15 is a Thursday
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "weekdays", rename_all = "snake_case")
)]
pub enum DeliveryFrequency {
    /// Every calendar day of the period.
    Daily,
    /// Every second day, counted from the period's effective start.
    AlternateDays,
    /// Every day whose weekday is in the set. The set may be empty.
    CustomDays(WeekdaySet),
}

impl DeliveryFrequency {
    /// Builds a frequency from a stored frequency code and weekday ordinals.
    ///
    /// `weekdays` is only consulted for the `custom` code; for the other codes
    /// it is ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScheduleInput` for an unknown code or for a custom
    /// weekday ordinal outside Sunday=0 … Saturday=6.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_engine::schedules::DeliveryFrequency;
    ///
    /// let freq = DeliveryFrequency::from_parts("custom", &[1, 3, 5]).unwrap();
    /// assert_eq!(freq.to_string(), "Custom Days (Mon, Wed, Fri)");
    ///
    /// assert!(DeliveryFrequency::from_parts("custom", &[7]).is_err());
    /// assert!(DeliveryFrequency::from_parts("weekly", &[]).is_err());
    /// ```
    pub fn from_parts(code: &str, weekdays: &[u8]) -> Result<Self, ScheduleError> {
        let frequency = match normalise(code).as_str() {
            "custom" | "customdays" => {
                return Ok(DeliveryFrequency::CustomDays(WeekdaySet::from_ordinals(
                    weekdays,
                )?))
            }
            "daily" | "everyday" => DeliveryFrequency::Daily,
            "alternate" | "alternatedays" | "alternateday" => DeliveryFrequency::AlternateDays,
            _ => {
                return Err(ScheduleError::invalid(format!(
                    "unknown delivery frequency: {}",
                    code
                )))
            }
        };

        if !weekdays.is_empty() {
            tracing::debug!(
                frequency = %frequency,
                ?weekdays,
                "ignoring custom weekdays for non-custom frequency"
            );
        }
        Ok(frequency)
    }

    /// Returns the display name of this frequency kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            DeliveryFrequency::Daily => "Daily",
            DeliveryFrequency::AlternateDays => "Alternate Days",
            DeliveryFrequency::CustomDays(_) => "Custom Days",
        }
    }

    /// Returns the stored code of this frequency kind.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryFrequency::Daily => "daily",
            DeliveryFrequency::AlternateDays => "alternate",
            DeliveryFrequency::CustomDays(_) => "custom",
        }
    }

    /// Returns the custom weekday selection, if this is `CustomDays`.
    pub fn weekdays(&self) -> Option<WeekdaySet> {
        match self {
            DeliveryFrequency::CustomDays(weekdays) => Some(*weekdays),
            _ => None,
        }
    }

    /// Returns whether `date` is a delivery day of a period starting at
    /// `effective_start`.
    ///
    /// Dates before `effective_start` are never delivery days.
    pub fn is_delivery_day(&self, date: Date, effective_start: Date) -> bool {
        let offset = date - effective_start;
        if offset < 0 {
            return false;
        }
        match self {
            DeliveryFrequency::Daily => true,
            DeliveryFrequency::AlternateDays => offset % 2 == 0,
            DeliveryFrequency::CustomDays(weekdays) => weekdays.contains(date.weekday()),
        }
    }
}

fn normalise(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_', ' '], "")
}

impl fmt::Display for DeliveryFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryFrequency::CustomDays(weekdays) => write!(f, "{} ({})", self.name(), weekdays),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for DeliveryFrequency {
    type Err = ScheduleError;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported formats:
    /// - Daily: "daily", "everyday"
    /// - AlternateDays: "alternate", "alternate-days", "alternate_days"
    /// - CustomDays: "custom:<weekdays>", e.g. "custom:mon,wed,fri" or
    ///   "custom:1,3,5"; "custom:" is the empty selection
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((code, weekdays)) if matches!(normalise(code).as_str(), "custom" | "customdays") => {
                Ok(DeliveryFrequency::CustomDays(weekdays.parse()?))
            }
            Some(_) => Err(ScheduleError::invalid(format!(
                "weekday list is only valid for custom frequency: {}",
                s
            ))),
            None => DeliveryFrequency::from_parts(s, &[]),
        }
    }
}
