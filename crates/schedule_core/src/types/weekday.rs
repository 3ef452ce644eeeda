//! Weekday types for custom delivery patterns.
//!
//! This module provides:
//! - `DeliveryWeekday`: Day of the week with Sunday=0 … Saturday=6 ordinals
//! - `WeekdaySet`: A compact set of weekdays selected for delivery
//!
//! # Examples
//!
//! ```
//! use schedule_core::types::weekday::{DeliveryWeekday, WeekdaySet};
//!
//! let set: WeekdaySet = "mon, wed, fri".parse().unwrap();
//! assert!(set.contains(DeliveryWeekday::Wednesday));
//! assert!(!set.contains(DeliveryWeekday::Sunday));
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.to_string(), "Mon, Wed, Fri");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::DateError;

/// Day of the week, numbered Sunday=0 … Saturday=6.
///
/// The ordinal numbering matches the one used by the mobile client when it
/// stores the custom delivery days of a subscription.
///
/// # Examples
///
/// ```
/// use schedule_core::types::weekday::DeliveryWeekday;
///
/// assert_eq!(DeliveryWeekday::Sunday.ordinal(), 0);
/// assert_eq!(DeliveryWeekday::from_ordinal(6).unwrap(), DeliveryWeekday::Saturday);
/// assert!(DeliveryWeekday::from_ordinal(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeliveryWeekday {
    /// Sunday (ordinal 0).
    Sunday,
    /// Monday (ordinal 1).
    Monday,
    /// Tuesday (ordinal 2).
    Tuesday,
    /// Wednesday (ordinal 3).
    Wednesday,
    /// Thursday (ordinal 4).
    Thursday,
    /// Friday (ordinal 5).
    Friday,
    /// Saturday (ordinal 6).
    Saturday,
}

impl DeliveryWeekday {
    /// All weekdays in ordinal order.
    pub const ALL: [DeliveryWeekday; 7] = [
        DeliveryWeekday::Sunday,
        DeliveryWeekday::Monday,
        DeliveryWeekday::Tuesday,
        DeliveryWeekday::Wednesday,
        DeliveryWeekday::Thursday,
        DeliveryWeekday::Friday,
        DeliveryWeekday::Saturday,
    ];

    /// Returns the ordinal (Sunday=0 … Saturday=6).
    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Looks up a weekday by ordinal.
    ///
    /// # Errors
    ///
    /// Returns `DateError::WeekdayOutOfRange` for ordinals above 6.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, DateError> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(DateError::WeekdayOutOfRange {
                ordinal: i64::from(ordinal),
            })
    }

    /// Returns the full English name.
    pub fn name(&self) -> &'static str {
        match self {
            DeliveryWeekday::Sunday => "Sunday",
            DeliveryWeekday::Monday => "Monday",
            DeliveryWeekday::Tuesday => "Tuesday",
            DeliveryWeekday::Wednesday => "Wednesday",
            DeliveryWeekday::Thursday => "Thursday",
            DeliveryWeekday::Friday => "Friday",
            DeliveryWeekday::Saturday => "Saturday",
        }
    }

    /// Returns the three-letter abbreviation shown on weekday chips.
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl From<chrono::Weekday> for DeliveryWeekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl From<DeliveryWeekday> for chrono::Weekday {
    fn from(weekday: DeliveryWeekday) -> Self {
        match weekday {
            DeliveryWeekday::Sunday => chrono::Weekday::Sun,
            DeliveryWeekday::Monday => chrono::Weekday::Mon,
            DeliveryWeekday::Tuesday => chrono::Weekday::Tue,
            DeliveryWeekday::Wednesday => chrono::Weekday::Wed,
            DeliveryWeekday::Thursday => chrono::Weekday::Thu,
            DeliveryWeekday::Friday => chrono::Weekday::Fri,
            DeliveryWeekday::Saturday => chrono::Weekday::Sat,
        }
    }
}

impl fmt::Display for DeliveryWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DeliveryWeekday {
    type Err = DateError;

    /// Parses a weekday from its name, abbreviation or ordinal (case-insensitive).
    ///
    /// Supported formats:
    /// - Full name: "sunday", "Monday"
    /// - Abbreviation: "sun", "tue", "tues", "thu", "thurs"
    /// - Ordinal: "0" … "6"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        if let Ok(ordinal) = normalised.parse::<i64>() {
            return u8::try_from(ordinal)
                .map_err(|_| DateError::WeekdayOutOfRange { ordinal })
                .and_then(Self::from_ordinal);
        }

        match normalised.as_str() {
            "sunday" | "sun" => Ok(DeliveryWeekday::Sunday),
            "monday" | "mon" => Ok(DeliveryWeekday::Monday),
            "tuesday" | "tue" | "tues" => Ok(DeliveryWeekday::Tuesday),
            "wednesday" | "wed" => Ok(DeliveryWeekday::Wednesday),
            "thursday" | "thu" | "thurs" => Ok(DeliveryWeekday::Thursday),
            "friday" | "fri" => Ok(DeliveryWeekday::Friday),
            "saturday" | "sat" => Ok(DeliveryWeekday::Saturday),
            _ => Err(DateError::ParseError(format!("Unknown weekday: {}", s))),
        }
    }
}

/// A set of weekdays, stored as a 7-bit mask.
///
/// The set may be empty: an empty custom selection is a legal subscription
/// that simply never delivers.
///
/// # Examples
///
/// ```
/// use schedule_core::types::weekday::{DeliveryWeekday, WeekdaySet};
///
/// let mut set = WeekdaySet::empty();
/// set.insert(DeliveryWeekday::Saturday);
/// set.insert(DeliveryWeekday::Sunday);
///
/// let ordered: Vec<_> = set.iter().collect();
/// assert_eq!(ordered, vec![DeliveryWeekday::Sunday, DeliveryWeekday::Saturday]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    const MASK: u8 = 0b0111_1111;

    /// Creates an empty set.
    #[inline]
    pub const fn empty() -> Self {
        WeekdaySet(0)
    }

    /// Creates a set containing every weekday.
    #[inline]
    pub const fn all() -> Self {
        WeekdaySet(Self::MASK)
    }

    /// Builds a set from raw ordinals, rejecting anything outside 0-6.
    ///
    /// Duplicate ordinals are accepted and collapse into one member.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_core::types::weekday::WeekdaySet;
    ///
    /// let set = WeekdaySet::from_ordinals(&[1, 3, 3, 5]).unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// assert!(WeekdaySet::from_ordinals(&[1, 9]).is_err());
    /// ```
    pub fn from_ordinals(ordinals: &[u8]) -> Result<Self, DateError> {
        ordinals
            .iter()
            .map(|&ordinal| DeliveryWeekday::from_ordinal(ordinal))
            .collect()
    }

    /// Adds a weekday. Returns `true` if it was not already present.
    pub fn insert(&mut self, weekday: DeliveryWeekday) -> bool {
        let present = self.contains(weekday);
        self.0 |= Self::bit(weekday);
        !present
    }

    /// Removes a weekday. Returns `true` if it was present.
    pub fn remove(&mut self, weekday: DeliveryWeekday) -> bool {
        let present = self.contains(weekday);
        self.0 &= !Self::bit(weekday);
        present
    }

    /// Returns whether the weekday is a member.
    #[inline]
    pub fn contains(&self, weekday: DeliveryWeekday) -> bool {
        self.0 & Self::bit(weekday) != 0
    }

    /// Number of weekdays in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether no weekday is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates members in ordinal order (Sunday first).
    pub fn iter(&self) -> impl Iterator<Item = DeliveryWeekday> + '_ {
        DeliveryWeekday::ALL
            .into_iter()
            .filter(move |weekday| self.contains(*weekday))
    }

    /// Returns the member ordinals in ascending order.
    pub fn ordinals(&self) -> Vec<u8> {
        self.iter().map(|weekday| weekday.ordinal()).collect()
    }

    #[inline]
    fn bit(weekday: DeliveryWeekday) -> u8 {
        1 << weekday.ordinal()
    }
}

impl FromIterator<DeliveryWeekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = DeliveryWeekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::empty();
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}

impl fmt::Display for WeekdaySet {
    /// Formats as "Mon, Wed, Fri", or "none" for the empty set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.iter().map(|weekday| weekday.short_name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl FromStr for WeekdaySet {
    type Err = DateError;

    /// Parses a comma-separated weekday list. A blank string is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(DeliveryWeekday::from_str)
            .collect()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{DeliveryWeekday, WeekdaySet};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for DeliveryWeekday {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_u8(self.ordinal())
        }
    }

    impl<'de> Deserialize<'de> for DeliveryWeekday {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let ordinal = u8::deserialize(deserializer)?;
            DeliveryWeekday::from_ordinal(ordinal).map_err(de::Error::custom)
        }
    }

    impl Serialize for WeekdaySet {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.ordinals().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for WeekdaySet {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let ordinals = Vec::<u8>::deserialize(deserializer)?;
            WeekdaySet::from_ordinals(&ordinals).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_round_trip_through_all() {
        for (index, weekday) in DeliveryWeekday::ALL.iter().enumerate() {
            assert_eq!(weekday.ordinal() as usize, index);
            assert_eq!(
                DeliveryWeekday::from_ordinal(index as u8).unwrap(),
                *weekday
            );
        }
    }

    #[test]
    fn test_from_ordinal_out_of_range() {
        assert_eq!(
            DeliveryWeekday::from_ordinal(7),
            Err(DateError::WeekdayOutOfRange { ordinal: 7 })
        );
    }

    #[test]
    fn test_from_chrono_weekday() {
        assert_eq!(
            DeliveryWeekday::from(chrono::Weekday::Sun),
            DeliveryWeekday::Sunday
        );
        assert_eq!(
            DeliveryWeekday::from(chrono::Weekday::Sat),
            DeliveryWeekday::Saturday
        );
        assert_eq!(
            chrono::Weekday::from(DeliveryWeekday::Thursday),
            chrono::Weekday::Thu
        );
    }

    #[test]
    fn test_parse_names_and_ordinals() {
        assert_eq!(
            "Monday".parse::<DeliveryWeekday>().unwrap(),
            DeliveryWeekday::Monday
        );
        assert_eq!(
            "THURS".parse::<DeliveryWeekday>().unwrap(),
            DeliveryWeekday::Thursday
        );
        assert_eq!(
            " 0 ".parse::<DeliveryWeekday>().unwrap(),
            DeliveryWeekday::Sunday
        );
        assert_eq!(
            "-1".parse::<DeliveryWeekday>(),
            Err(DateError::WeekdayOutOfRange { ordinal: -1 })
        );
        assert_eq!(
            "8".parse::<DeliveryWeekday>(),
            Err(DateError::WeekdayOutOfRange { ordinal: 8 })
        );
        assert!("someday".parse::<DeliveryWeekday>().is_err());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(DeliveryWeekday::Wednesday.short_name(), "Wed");
        assert_eq!(DeliveryWeekday::Sunday.short_name(), "Sun");
    }

    #[test]
    fn test_set_insert_remove() {
        let mut set = WeekdaySet::empty();
        assert!(set.is_empty());
        assert!(set.insert(DeliveryWeekday::Monday));
        assert!(!set.insert(DeliveryWeekday::Monday));
        assert_eq!(set.len(), 1);
        assert!(set.remove(DeliveryWeekday::Monday));
        assert!(!set.remove(DeliveryWeekday::Monday));
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_all() {
        let set = WeekdaySet::all();
        assert_eq!(set.len(), 7);
        assert!(DeliveryWeekday::ALL.iter().all(|w| set.contains(*w)));
    }

    #[test]
    fn test_set_parse() {
        let set: WeekdaySet = "sat,sun, 3".parse().unwrap();
        assert_eq!(set.ordinals(), vec![0, 3, 6]);

        let empty: WeekdaySet = "".parse().unwrap();
        assert!(empty.is_empty());

        assert!("mon,funday".parse::<WeekdaySet>().is_err());
    }

    #[test]
    fn test_set_display() {
        assert_eq!(WeekdaySet::empty().to_string(), "none");
        let set = WeekdaySet::from_ordinals(&[5, 1]).unwrap();
        assert_eq!(set.to_string(), "Mon, Fri");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_set_serde() {
        let set = WeekdaySet::from_ordinals(&[2, 4]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[2,4]");

        let parsed: WeekdaySet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);

        assert!(serde_json::from_str::<WeekdaySet>("[7]").is_err());
    }
}
