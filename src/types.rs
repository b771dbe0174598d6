use crate::DateError;
use crate::consts::{DAYS_IN_MONTH, FEBRUARY_DAYS_LEAP};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month of the year, ordinals 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Creates a Month from its 1-based ordinal.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the ordinal is 0 or > 12.
    pub const fn from_ordinal(value: u8) -> Result<Self, DateError> {
        match value {
            1 => Ok(Self::January),
            2 => Ok(Self::February),
            3 => Ok(Self::March),
            4 => Ok(Self::April),
            5 => Ok(Self::May),
            6 => Ok(Self::June),
            7 => Ok(Self::July),
            8 => Ok(Self::August),
            9 => Ok(Self::September),
            10 => Ok(Self::October),
            11 => Ok(Self::November),
            12 => Ok(Self::December),
            _ => Err(DateError::InvalidMonth(value)),
        }
    }

    /// Returns the 1-based ordinal.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Standard day count of this month, leap-sensitive for February.
    /// Does not know about October 1582; see `calendar::day_count`.
    pub const fn day_count(self, in_leap_year: bool) -> u8 {
        if matches!(self, Self::February) && in_leap_year {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self as usize]
        }
    }

    /// English month name, for diagnostics only. Localized rendering is the
    /// host's concern.
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.ordinal()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Day of the week, ISO-style ordinals: Monday = 1 … Sunday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum WeekdayOrder {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekdayOrder {
    /// All seven weekdays, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a WeekdayOrder from its 1-based ordinal.
    ///
    /// # Errors
    /// Returns `DateError::InvalidWeekday` if the ordinal is 0 or > 7.
    pub const fn from_ordinal(value: u8) -> Result<Self, DateError> {
        match value {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(DateError::InvalidWeekday(value)),
        }
    }

    /// Returns the 1-based ordinal (Monday = 1).
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether this day is off work. Sunday always counts; Saturday only
    /// under a two-days-off policy.
    pub const fn is_weekend(self, two_days_off: bool) -> bool {
        match self {
            Self::Sunday => true,
            Self::Saturday => two_days_off,
            _ => false,
        }
    }

    /// English weekday name, for diagnostics only.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl TryFrom<u8> for WeekdayOrder {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value)
    }
}

impl From<WeekdayOrder> for u8 {
    fn from(weekday: WeekdayOrder) -> Self {
        weekday.ordinal()
    }
}

impl fmt::Display for WeekdayOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A (year, month) pair with a dense integer index for month arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianMonth {
    pub year: i32,
    pub month: Month,
}

impl GregorianMonth {
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Dense index: `year * 12 + ordinal - 1`. Adjacent months differ by
    /// exactly one, across year boundaries included.
    pub const fn index(self) -> i64 {
        self.year as i64 * 12 + self.month.ordinal() as i64 - 1
    }

    /// Inverse of [`index`](Self::index). Euclidean division keeps the
    /// reconstruction exact for negative (proleptic) years.
    pub fn from_index(index: i64) -> Self {
        let year = index.div_euclid(12) as i32;
        let ordinal = (index.rem_euclid(12) + 1) as u8;
        let month = Month::from_ordinal(ordinal).unwrap_or(Month::January);
        Self { year, month }
    }
}
