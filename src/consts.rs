/// JDN of 1582-10-15, the first Gregorian day.
pub const GREGORIAN_START_JDN: i64 = 2_299_161;

/// JDN of 1582-10-04, the last Julian day before the reform skip.
pub const JULIAN_END_JDN: i64 = 2_299_160;

/// Year of the Gregorian reform.
pub const REFORM_YEAR: i32 = 1582;

/// Calendar days removed by the reform (October 5–14, 1582).
pub const REFORM_SKIPPED_DAYS: u8 = 10;

/// Day count of October 1582: days 1–4 plus 15–31.
pub const REFORM_MONTH_DAY_COUNT: u8 = 21;

/// Day count of the reform year itself.
pub const REFORM_YEAR_DAY_COUNT: u16 = 355;

/// JDN of 1970-01-01 (Unix epoch).
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Maximum valid month ordinal (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum valid weekday ordinal (Sunday)
pub const MAX_WEEKDAY: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by the leap rule)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Proleptic window where Scaliger's erratic-leap reconstruction applies.
pub const SCALIGER_FIRST_YEAR: i32 = -41;
pub const SCALIGER_LAST_YEAR: i32 = -8;

/// Date component separator for the wire form
pub const DATE_SEPARATOR: char = '-';
