//! Bidirectional (year, month, day) ↔ Julian Day Number conversion.
//!
//! Fliegel–Van Flandern form, hybrid across the 1582 Gregorian reform:
//! the Julian rule applies to every date up to 1582-10-04, the Gregorian
//! rule from 1582-10-15 on. The JDN axis itself is gapless; the ten
//! skipped calendar days simply have no (y, m, d) label of their own.

use crate::consts::{GREGORIAN_START_JDN, REFORM_YEAR};
use crate::types::Month;

/// First Gregorian-labelled day of October 1582.
const REFORM_RESUME_DAY: u8 = 15;

/// Maps a calendar date to its Julian Day Number (noon-epoch convention).
///
/// The caller is responsible for passing a valid day-of-month; the formula
/// itself is total and monotonic in (year, month, day) for years down to
/// roughly -4700, far below the -41 proleptic floor the leap rule supports.
pub fn to_jdn(year: i32, month: Month, day: u8) -> i64 {
    let a = i64::from(month <= Month::February);
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month.ordinal()) + 12 * a - 3;
    let day_part = (153 * m + 2) / 5;
    let base = i64::from(day) + day_part + 365 * y + y / 4;
    if is_gregorian(year, month, day) {
        base - (y / 100 - y / 400) - 32_045
    } else {
        base - 32_083
    }
}

/// Inverse of [`to_jdn`]: recovers the (year, month, day) label of a JDN.
///
/// Uses the classic fractional-day pivot; with an integer noon-epoch JDN the
/// pivot `z = floor(jdn + 0.5)` collapses to `jdn` and the day fraction
/// contributes nothing, so the arithmetic below stays on integers except for
/// the century and month divisions the algorithm defines over floats.
pub fn from_jdn(jdn: i64) -> (i32, Month, u8) {
    let z = jdn;
    let a = if z < GREGORIAN_START_JDN {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha / 4
    };
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = (((b - d) as f64) / 30.6001).floor() as i64;
    let day = b - d - (30.6001 * e as f64).floor() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    let month = Month::from_ordinal(month as u8).unwrap_or(Month::January);
    (year as i32, month, day as u8)
}

/// True when (year, month, day) falls on or after the 1582-10-15 cutover.
fn is_gregorian(year: i32, month: Month, day: u8) -> bool {
    year > REFORM_YEAR
        || (year == REFORM_YEAR && month > Month::October)
        || (year == REFORM_YEAR && month == Month::October && day >= REFORM_RESUME_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar;
    use crate::consts::{JULIAN_END_JDN, UNIX_EPOCH_JDN};

    /// Day-of-month labels that round-trip for a given month, i.e. the
    /// valid days minus the ten Julian-labelled aliases of October 1582.
    fn round_trip_days(year: i32, month: Month) -> Vec<u8> {
        let count = month.day_count(calendar::is_leap(year));
        if year == REFORM_YEAR && month == Month::October {
            (1..=4).chain(15..=31).collect()
        } else {
            (1..=count).collect()
        }
    }

    #[test]
    fn test_known_anchors() {
        struct TestCase {
            year: i32,
            month: Month,
            day: u8,
            jdn: i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2000,
                month: Month::January,
                day: 1,
                jdn: 2_451_545,
                description: "J2000 epoch",
            },
            TestCase {
                year: 1970,
                month: Month::January,
                day: 1,
                jdn: UNIX_EPOCH_JDN,
                description: "Unix epoch",
            },
            TestCase {
                year: 1582,
                month: Month::October,
                day: 4,
                jdn: JULIAN_END_JDN,
                description: "last Julian day",
            },
            TestCase {
                year: 1582,
                month: Month::October,
                day: 15,
                jdn: GREGORIAN_START_JDN,
                description: "first Gregorian day",
            },
            TestCase {
                year: 1,
                month: Month::January,
                day: 1,
                jdn: 1_721_424,
                description: "Julian 0001-01-01",
            },
        ];

        for case in &cases {
            assert_eq!(
                to_jdn(case.year, case.month, case.day),
                case.jdn,
                "to_jdn mismatch: {}",
                case.description
            );
            assert_eq!(
                from_jdn(case.jdn),
                (case.year, case.month, case.day),
                "from_jdn mismatch: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_cutover_is_one_step() {
        assert_eq!(
            to_jdn(1582, Month::October, 4) + 1,
            to_jdn(1582, Month::October, 15)
        );
    }

    #[test]
    fn test_reform_gap_labels_alias_gregorian_dates() {
        // Julian-labelled October 5 1582 shares its JDN with Gregorian
        // October 15; the axis has no hole.
        assert_eq!(to_jdn(1582, Month::October, 5), GREGORIAN_START_JDN);
        assert_eq!(to_jdn(1582, Month::October, 14), GREGORIAN_START_JDN + 9);
    }

    #[test]
    fn test_round_trip_representative_years() {
        let years = [
            -41, -40, -8, -1, 0, 1, 4, 100, 400, 800, 1000, 1500, 1582, 1583, 1600, 1700, 1900,
            2000, 2023, 2024, 2100,
        ];
        for year in years {
            for month in Month::ALL {
                for day in round_trip_days(year, month) {
                    let jdn = to_jdn(year, month, day);
                    assert_eq!(
                        from_jdn(jdn),
                        (year, month, day),
                        "round trip failed for {year}-{:02}-{day:02} (jdn {jdn})",
                        month.ordinal()
                    );
                }
            }
        }
    }

    #[test]
    fn test_monotonic_across_reform() {
        // Every consecutive pair of labelled days in 1581..=1583 must sit
        // exactly one JDN apart once the ten skipped labels are excluded.
        let mut previous: Option<i64> = None;
        for year in 1581..=1583 {
            for month in Month::ALL {
                for day in round_trip_days(year, month) {
                    let jdn = to_jdn(year, month, day);
                    if let Some(prev) = previous {
                        assert_eq!(jdn, prev + 1, "gap at {year}-{:02}-{day:02}", month.ordinal());
                    }
                    previous = Some(jdn);
                }
            }
        }
    }

    #[test]
    fn test_monotonic_proleptic_years() {
        let mut previous: Option<i64> = None;
        for year in -45..=5 {
            for month in Month::ALL {
                for day in round_trip_days(year, month) {
                    let jdn = to_jdn(year, month, day);
                    if let Some(prev) = previous {
                        assert!(jdn > prev, "not increasing at {year}-{:02}-{day:02}", month.ordinal());
                    }
                    previous = Some(jdn);
                }
            }
        }
    }
}
