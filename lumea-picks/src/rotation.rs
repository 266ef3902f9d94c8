//! Calendar-keyed rotation arithmetic.
//!
//! Picks rotate by day or week of year instead of randomness so the
//! same user sees the same list on every device all day, yet the list
//! still feels fresh across days. Both keys derive from an injected
//! timestamp; nothing here reads the wall clock.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// 1-based day of year in the caller's local calendar.
pub(crate) fn day_of_year(now: NaiveDateTime) -> i64 {
    i64::from(now.ordinal())
}

/// Whole weeks elapsed since the eve of 1 January of `now`'s year.
///
/// Week 0 covers the first seven days of the year counted from the eve
/// of 1 January, so the key advances mid-week rather than on Mondays.
pub(crate) fn week_of_year(now: NaiveDateTime) -> i64 {
    NaiveDate::from_yo_opt(now.year(), 1).map_or(0, |jan_first| {
        let since_new_years_eve = now - jan_first.and_time(NaiveTime::MIN) + TimeDelta::days(1);
        since_new_years_eve.num_weeks()
    })
}

/// Left-rotation offset for a pool of `len` entries under `key`.
///
/// The divisor is guarded so an empty pool never divides by zero; the
/// result is always a valid rotation index (`0` when the pool is
/// empty).
#[expect(
    clippy::integer_division_remainder_used,
    reason = "rotation wraps a calendar key by the pool length"
)]
pub(crate) fn offset(key: i64, len: usize) -> usize {
    let modulus = i64::try_from(len).unwrap_or(i64::MAX).max(1);
    usize::try_from(key.rem_euclid(modulus)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when setup breaks"
    )]

    use rstest::rstest;

    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid date")
    }

    #[rstest]
    #[case(at(2024, 1, 1, 0), 1)]
    #[case(at(2024, 1, 1, 23), 1)]
    #[case(at(2024, 2, 1, 12), 32)]
    #[case(at(2024, 12, 31, 0), 366)]
    #[case(at(2023, 12, 31, 0), 365)]
    fn day_of_year_is_one_based(#[case] now: NaiveDateTime, #[case] expected: i64) {
        assert_eq!(day_of_year(now), expected);
    }

    #[rstest]
    #[case(at(2024, 1, 1, 0), 0)]
    #[case(at(2024, 1, 6, 23), 0)]
    #[case(at(2024, 1, 7, 1), 1)]
    #[case(at(2024, 2, 1, 0), 4)]
    #[case(at(2023, 12, 31, 0), 52)]
    fn week_of_year_counts_from_new_years_eve(#[case] now: NaiveDateTime, #[case] expected: i64) {
        assert_eq!(week_of_year(now), expected);
    }

    #[rstest]
    #[case(10, 3, 1)]
    #[case(10, 0, 0)]
    #[case(0, 5, 0)]
    #[case(7, 7, 0)]
    #[case(366, 8, 6)]
    fn offset_wraps_and_guards_empty_pools(
        #[case] key: i64,
        #[case] len: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(offset(key, len), expected);
    }
}
