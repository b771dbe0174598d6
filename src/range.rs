use std::cmp::Ordering;

use crate::GregorianDay;
use crate::calendar;
use crate::prelude::*;
use crate::types::Month;

/// An inclusive interval on the JDN axis.
///
/// Implementors report their first and last JDN; containment, intersection
/// and before-ness queries come for free and always operate on the JDN axis,
/// never on (year, month, day) tuples.
pub trait DayRange {
    fn first_day(&self) -> i64;
    fn last_day(&self) -> i64;

    /// Whether the interval covers the given day.
    fn contains(&self, day: &GregorianDay) -> bool {
        (self.first_day()..=self.last_day()).contains(&day.julian_day())
    }

    /// Two intervals intersect unless one ends strictly before the other
    /// starts.
    fn intersects<R: DayRange + ?Sized>(&self, other: &R) -> bool {
        other.last_day() >= self.first_day() && other.first_day() <= self.last_day()
    }

    /// Whether the interval ends strictly before the given day.
    fn ends_before(&self, day: &GregorianDay) -> bool {
        self.last_day() < day.julian_day()
    }
}

/// A single day is the degenerate one-day interval.
impl DayRange for GregorianDay {
    fn first_day(&self) -> i64 {
        self.julian_day()
    }

    fn last_day(&self) -> i64 {
        self.julian_day()
    }
}

/// An inclusive JDN interval anchored by two calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct GregorianDayContainer {
    start: GregorianDay,
    end: GregorianDay,
}

impl GregorianDayContainer {
    /// Creates a container from explicit endpoints. Callers are expected to
    /// pass `start <= end`; the queries degrade to "empty" otherwise.
    pub const fn new(start: GregorianDay, end: GregorianDay) -> Self {
        Self { start, end }
    }

    /// The whole-year interval January 1 through December 31.
    pub fn for_year(year: i32) -> Self {
        Self {
            start: GregorianDay::from_parts(year, Month::January, 1),
            end: GregorianDay::from_parts(year, Month::December, 31),
        }
    }

    /// The whole-month interval. October 1582 keeps its legacy 21-day
    /// count, so the container ends at Gregorian October 21; the tail of
    /// the reform month is not covered.
    pub fn for_month(month: Month, year: i32) -> Self {
        Self {
            start: calendar::first_day(month, year),
            end: calendar::last_day(month, year),
        }
    }

    pub const fn start(&self) -> GregorianDay {
        self.start
    }

    pub const fn end(&self) -> GregorianDay {
        self.end
    }
}

impl DayRange for GregorianDayContainer {
    fn first_day(&self) -> i64 {
        self.start.julian_day()
    }

    fn last_day(&self) -> i64 {
        self.end.julian_day()
    }
}

impl PartialOrd for GregorianDayContainer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDayContainer {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

/// Binary search over a gap-sorted sequence of ranges.
///
/// Returns the range containing the day, or `None` if no range matches.
/// The sequence must be sorted by interval with no overlaps for the search
/// to be correct; that precondition is the caller's, not validated here.
pub fn find_containing<'a, T: DayRange>(ranges: &'a [T], day: &GregorianDay) -> Option<&'a T> {
    let mut lower = 0;
    let mut upper = ranges.len();
    while lower < upper {
        let mid = lower + (upper - lower) / 2;
        let candidate = &ranges[mid];
        if candidate.contains(day) {
            return Some(candidate);
        } else if candidate.ends_before(day) {
            lower = mid + 1;
        } else {
            upper = mid;
        }
    }
    None
}
