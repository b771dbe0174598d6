//! Calendar rules (leap years, day counts, month navigation) and the
//! caller-owned "today" tracker.

use crate::GregorianDay;
use crate::consts::{
    REFORM_MONTH_DAY_COUNT, REFORM_YEAR, REFORM_YEAR_DAY_COUNT, SCALIGER_FIRST_YEAR,
    SCALIGER_LAST_YEAR,
};
use crate::service::CivilDateSource;
use crate::types::Month;

/// Leap-year rule of the hybrid calendar.
///
/// Years after 1582 follow the full Gregorian rule, years 5..=1582 the plain
/// Julian every-fourth-year rule. Years at or below 4 fall under Scaliger's
/// reconstruction of the erratic early application of the Julian reform; any
/// proleptic year outside the documented -41..=-8 window is treated as a
/// common year, a known approximation.
pub const fn is_leap(year: i32) -> bool {
    if year <= 4 {
        fix_leap(year)
    } else if year % 4 == 0 {
        if year > REFORM_YEAR {
            if year % 100 == 0 { year % 400 == 0 } else { true }
        } else {
            true
        }
    } else {
        false
    }
}

/// Scaliger's correction window, evaluated with a truncating remainder;
/// no negative year satisfies `year % 3 == 2`, so the window reports every
/// year as common.
const fn fix_leap(year: i32) -> bool {
    year >= SCALIGER_FIRST_YEAR && year <= SCALIGER_LAST_YEAR && year % 3 == 2
}

/// Day count of a month in a concrete year. October 1582 has 21 labelled
/// days (1–4 and 15–31); everything else follows the standard table.
pub const fn day_count(month: Month, year: i32) -> u8 {
    if year == REFORM_YEAR && matches!(month, Month::October) {
        REFORM_MONTH_DAY_COUNT
    } else {
        month.day_count(is_leap(year))
    }
}

/// Day count of a whole year. The reform year comes up ten days short.
pub const fn year_day_count(year: i32) -> u16 {
    if is_leap(year) {
        366
    } else if year == REFORM_YEAR {
        REFORM_YEAR_DAY_COUNT
    } else {
        365
    }
}

/// First calendar day of the given month.
pub fn first_day(month: Month, year: i32) -> GregorianDay {
    GregorianDay::from_parts(year, month, 1)
}

/// Last labelled calendar day of the given month.
pub fn last_day(month: Month, year: i32) -> GregorianDay {
    GregorianDay::from_parts(year, month, day_count(month, year))
}

/// Every labelled day of the given month, in order.
pub fn days_in(month: Month, year: i32) -> Vec<GregorianDay> {
    (1..=day_count(month, year))
        .map(|day| GregorianDay::from_parts(year, month, day))
        .collect()
}

/// The month after (month, year), crossing the December boundary.
pub fn next_month(month: Month, year: i32) -> (Month, i32) {
    let ordinal = month.ordinal() % 12 + 1;
    let month = Month::from_ordinal(ordinal).unwrap_or(Month::January);
    match month {
        Month::January => (month, year + 1),
        _ => (month, year),
    }
}

/// The month before (month, year), crossing the January boundary.
pub fn previous_month(month: Month, year: i32) -> (Month, i32) {
    let ordinal = (month.ordinal() + 10) % 12 + 1;
    let month = Month::from_ordinal(ordinal).unwrap_or(Month::January);
    match month {
        Month::December => (month, year - 1),
        _ => (month, year),
    }
}

/// Opaque handle returned by [`TodayTracker::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn Fn(GregorianDay) + Send + Sync>;

/// Tracks the current calendar day for one host context.
///
/// The host decides when a recompute is due (timer tick, resume from
/// background, significant time change) and calls [`refresh`](Self::refresh)
/// or [`refresh_from`](Self::refresh_from) with its notion of "now".
/// Listeners fire only when the day actually changes.
pub struct TodayTracker {
    today: GregorianDay,
    listeners: Vec<(Subscription, Listener)>,
    next_token: u64,
}

impl TodayTracker {
    pub fn new(today: GregorianDay) -> Self {
        Self {
            today,
            listeners: Vec::new(),
            next_token: 0,
        }
    }

    /// Seeds the tracker from a wall-clock instant.
    pub fn from_unix_seconds(unix_seconds: i64, utc_offset_seconds: i64) -> Self {
        Self::new(GregorianDay::from_unix_seconds(unix_seconds, utc_offset_seconds))
    }

    pub fn today(&self) -> GregorianDay {
        self.today
    }

    pub fn is_today(&self, day: GregorianDay) -> bool {
        self.today == day
    }

    pub fn is_current_month(&self, month: Month, year: i32) -> bool {
        self.today.month() == month && self.today.year() == year
    }

    pub fn is_current_year(&self, year: i32) -> bool {
        self.today.year() == year
    }

    /// Recomputes today from a wall-clock instant. Listeners are notified
    /// only on an actual day change.
    pub fn refresh(&mut self, unix_seconds: i64, utc_offset_seconds: i64) {
        self.set_today(GregorianDay::from_unix_seconds(unix_seconds, utc_offset_seconds));
    }

    /// Recomputes today from an injected civil-date source, for hosts whose
    /// platform calendar already did the timezone work.
    pub fn refresh_from<S: CivilDateSource>(&mut self, source: &S) {
        let (year, month, day) = source.civil_date();
        let month = Month::from_ordinal(month).unwrap_or(Month::January);
        self.set_today(GregorianDay::from_parts(year, month, day));
    }

    /// Registers a listener for day changes.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: Fn(GregorianDay) + Send + Sync + 'static,
    {
        let token = Subscription(self.next_token);
        self.next_token += 1;
        self.listeners.push((token, Box::new(listener)));
        token
    }

    /// Removes a listener. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(token, _)| *token != subscription);
    }

    fn set_today(&mut self, day: GregorianDay) {
        if day == self.today {
            return;
        }
        log::debug!("today changed from {} to {}", self.today, day);
        self.today = day;
        for (_, listener) in &self.listeners {
            listener(day);
        }
    }
}

impl std::fmt::Debug for TodayTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodayTracker")
            .field("today", &self.today)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
