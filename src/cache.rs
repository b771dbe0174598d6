//! Optional memoization for repeated date/JDN conversions.
//!
//! The cache is advisory: a miss computes directly, and every hit must be
//! byte-for-byte what direct computation would have produced. Conversions
//! stay correct with no cache at all; callers inject one only when the same
//! dates come up repeatedly (e.g. laying out the same month view).

use crate::GregorianDay;
use crate::types::Month;
use rustc_hash::FxHashMap;
use std::sync::{PoisonError, RwLock};

/// Process-safe map from (year, month, day) and JDN to resolved days.
///
/// Readers-writer discipline: lookups take the read lock, insertions the
/// write lock. A poisoned lock degrades to direct computation of the value,
/// never to a wrong one.
#[derive(Debug, Default)]
pub struct DayCache {
    by_date: RwLock<FxHashMap<(i32, u8, u8), GregorianDay>>,
    by_jdn: RwLock<FxHashMap<i64, GregorianDay>>,
}

impl DayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a (year, month, day) triple, memoizing the result.
    pub fn resolve(&self, year: i32, month: Month, day: u8) -> GregorianDay {
        let key = (year, month.ordinal(), day);
        if let Some(found) = self
            .by_date
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return *found;
        }
        let computed = GregorianDay::from_parts(year, month, day);
        self.by_date
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, computed);
        computed
    }

    /// Resolves a JDN to its labelled day, memoizing the result.
    pub fn resolve_jdn(&self, jdn: i64) -> GregorianDay {
        if let Some(found) = self
            .by_jdn
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&jdn)
        {
            return *found;
        }
        let computed = GregorianDay::from_jdn(jdn);
        self.by_jdn
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(jdn, computed);
        computed
    }

    /// Number of memoized entries across both keys.
    pub fn len(&self) -> usize {
        let dates = self
            .by_date
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        let jdns = self
            .by_jdn
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        dates + jdns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all memoized entries.
    pub fn clear(&self) {
        self.by_date
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.by_jdn
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
