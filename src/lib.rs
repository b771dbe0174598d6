mod cache;
pub mod calendar;
mod consts;
mod jdn;
mod prelude;
mod range;
mod service;
mod types;

pub use cache::DayCache;
pub use consts::*;
pub use jdn::{from_jdn, to_jdn};
pub use range::{DayRange, GregorianDayContainer, find_containing};
pub use service::{CalendarConverter, CalendarSystem, CivilDateSource, ConvertedDate, LocaleProvider};
pub use types::{GregorianMonth, Month, WeekdayOrder};

use crate::prelude::*;
use std::cmp::Ordering;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A calendar day of the Julian/Gregorian hybrid calendar, with its
/// precomputed Julian Day Number.
///
/// The (year, month, day) label and `julian_day` are locked together at
/// construction; every arithmetic operation and the weekday derivation go
/// through `julian_day`, never through the label components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", year, "month.ordinal()", day)]
pub struct GregorianDay {
    year: i32,
    month: Month,
    day: u8,
    julian_day: i64,
}

/// Error type for date construction and strict parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month ordinal outside 1-12.
    #[error("invalid month ordinal {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Weekday ordinal outside 1-7.
    #[error("invalid weekday ordinal {0} (must be 1-7)")]
    InvalidWeekday(u8),

    /// Day outside the month's valid range.
    #[error("invalid day {day} for {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Unparseable date string (strict parsing only).
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

impl GregorianDay {
    /// Fallback used by the permissive wire decoder.
    const SENTINEL: (i32, Month, u8) = (1, Month::January, 1);

    /// Creates a validated day. The day must fit the month's standard
    /// leap-aware length; October 1582 accepts 1-31 so that both the
    /// Julian-labelled head and the Gregorian-labelled tail of the reform
    /// month stay representable.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day is 0 or past the month's
    /// last day.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, DateError> {
        let max = month.day_count(calendar::is_leap(year));
        if !(MIN_DAY..=max).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month: month.ordinal(),
                day,
            });
        }
        Ok(Self::from_parts(year, month, day))
    }

    /// Unvalidated constructor; the JDN is still always derived from the
    /// label so the core invariant holds for any input.
    pub(crate) fn from_parts(year: i32, month: Month, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            julian_day: jdn::to_jdn(year, month, day),
        }
    }

    /// Labels a JDN with its (year, month, day). A JDN inside the reform
    /// window labels as the Gregorian date (1582-10-15 and later).
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn::from_jdn(jdn);
        Self {
            year,
            month,
            day,
            julian_day: jdn,
        }
    }

    /// The day containing a wall-clock instant, shifted by a fixed UTC
    /// offset in seconds. This is the full extent of timezone handling in
    /// the core; anything smarter goes through [`CivilDateSource`].
    pub fn from_unix_seconds(unix_seconds: i64, utc_offset_seconds: i64) -> Self {
        let days = (unix_seconds + utc_offset_seconds).div_euclid(SECONDS_PER_DAY);
        Self::from_jdn(UNIX_EPOCH_JDN + days)
    }

    /// Millisecond variant of [`from_unix_seconds`](Self::from_unix_seconds).
    pub fn from_unix_millis(unix_millis: i64, utc_offset_seconds: i64) -> Self {
        Self::from_unix_seconds(unix_millis.div_euclid(MILLIS_PER_SECOND), utc_offset_seconds)
    }

    /// Midnight of this day as a Unix timestamp, shifted by the offset.
    pub fn to_unix_seconds(&self, utc_offset_seconds: i64) -> i64 {
        (self.julian_day - UNIX_EPOCH_JDN) * SECONDS_PER_DAY - utc_offset_seconds
    }

    /// Permissive wire decoder. Anything that is not three `-`-separated
    /// components, or whose components do not form a valid day, falls back
    /// to the 0001-01-01 sentinel instead of failing. Out-of-range month
    /// ordinals degrade to January before the day check, matching the
    /// legacy wire behavior.
    pub fn from_wire(value: &str) -> Self {
        let parts: Vec<&str> = value.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Self::sentinel();
        }
        let year = parts[0].parse().unwrap_or(1);
        let month = parts[1]
            .parse()
            .ok()
            .and_then(|ordinal| Month::from_ordinal(ordinal).ok())
            .unwrap_or(Month::January);
        let day = parts[2].parse().unwrap_or(1);
        Self::new(year, month, day).unwrap_or_else(|_| Self::sentinel())
    }

    fn sentinel() -> Self {
        let (year, month, day) = Self::SENTINEL;
        Self::from_parts(year, month, day)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The Julian Day Number, noon-epoch convention.
    #[inline]
    pub const fn julian_day(&self) -> i64 {
        self.julian_day
    }

    /// Weekday of this day. The modular phase of the JDN axis is a fixed
    /// constant, calibrated against known anchors (2000-01-01 is a
    /// Saturday) and pinned by tests; it is never re-derived.
    pub fn weekday(&self) -> WeekdayOrder {
        let ordinal = (self.julian_day.rem_euclid(7) + 1) as u8;
        WeekdayOrder::from_ordinal(ordinal).unwrap_or(WeekdayOrder::Sunday)
    }

    /// Display label of the day-of-month.
    ///
    /// Carries the legacy +10 adjustment for September 1582, day 5 and
    /// later, a long-standing misapplication of the October reform skip;
    /// pinned by a regression test rather than corrected.
    pub fn day_string(&self) -> String {
        if self.year == REFORM_YEAR && self.month == Month::September && self.day >= 5 {
            (self.day + REFORM_SKIPPED_DAYS).to_string()
        } else {
            self.day.to_string()
        }
    }
}

impl PartialOrd for GregorianDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDay {
    fn cmp(&self, other: &Self) -> Ordering {
        // Public contract: lexical on (year, month, day). Agrees with the
        // JDN order everywhere except among the reform month's aliased
        // labels, which compare by label.
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Sub for GregorianDay {
    type Output = i64;

    /// Signed day count between two days, positive if `self` is later.
    fn sub(self, other: Self) -> i64 {
        self.julian_day - other.julian_day
    }
}

impl Add<i64> for GregorianDay {
    type Output = Self;

    /// The day `days` steps along the JDN axis, negative steps included.
    fn add(self, days: i64) -> Self {
        Self::from_jdn(self.julian_day + days)
    }
}

impl FromStr for GregorianDay {
    type Err = DateError;

    /// Strict parser for callers that want errors instead of the wire
    /// decoder's sentinel fallback. Accepts exactly `year-month-day` with
    /// non-negative year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::InvalidFormat("empty date string".to_owned()));
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month_ordinal: u8 = parts[1]
            .parse()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let month = Month::from_ordinal(month_ordinal)?;
        let day: u8 = parts[2]
            .parse()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&s))
    }
}
