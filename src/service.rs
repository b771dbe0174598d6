//! Seams for capabilities the core consumes but does not implement:
//! platform civil-date extraction, locale conventions, and conversion to
//! non-Gregorian calendar systems. The core only ever sees these as
//! injected trait objects; it never reaches for a process-global locale.

use crate::GregorianDay;
use crate::types::WeekdayOrder;

/// Extracts the current (year, month ordinal, day) in the host's timezone.
///
/// Implementations wrap whatever platform calendar API is available; the
/// core treats the triple as authoritative and does no timezone math of
/// its own on this path.
pub trait CivilDateSource {
    fn civil_date(&self) -> (i32, u8, u8);
}

/// Locale conventions the UI layer needs but the core must not assume.
pub trait LocaleProvider {
    /// The host's first day of the week.
    fn first_weekday(&self) -> WeekdayOrder;

    /// Whether Saturday counts as a weekend day in this locale.
    fn two_day_weekend(&self) -> bool {
        true
    }
}

/// Calendar systems a host converter may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    IslamicCivil,
    Hebrew,
}

/// A date expressed in a non-Gregorian calendar system. Month and day are
/// plain ordinals; their meaning belongs to the target system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConvertedDate {
    pub system: CalendarSystem,
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Conversion to another calendar system, delegated to a platform engine.
///
/// Returns `None` when the engine cannot represent the date.
pub trait CalendarConverter {
    fn convert(&self, day: &GregorianDay, system: CalendarSystem) -> Option<ConvertedDate>;
}
