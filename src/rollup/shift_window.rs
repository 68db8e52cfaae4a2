//! Shift containment and shift-start resolution.
//!
//! Converts wall-clock instants into the operational shift windows the
//! dashboard buckets by. The three windows tile the local day, so both
//! functions are total over all valid instants.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::models::Shift;

/// Returns the shift whose window contains the local time-of-day of `t`.
///
/// Lower bounds are inclusive: an instant at exactly 08:00 belongs to
/// `prime`, 16:00 to `midshift` and midnight to `closing`, never to the
/// window that ends there.
///
/// # Example
///
/// ```
/// use chrono::TimeZone;
/// use shiftboard::clock::ORG_TZ;
/// use shiftboard::models::Shift;
/// use shiftboard::rollup::shift_for;
///
/// let mid_morning = ORG_TZ.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
/// assert_eq!(shift_for(mid_morning), Shift::Prime);
///
/// let late_night = ORG_TZ.with_ymd_and_hms(2024, 3, 10, 2, 0, 0).unwrap();
/// assert_eq!(shift_for(late_night), Shift::Closing);
/// ```
pub fn shift_for(t: DateTime<Tz>) -> Shift {
    match t.hour() {
        8..=15 => Shift::Prime,
        16..=23 => Shift::Midshift,
        _ => Shift::Closing,
    }
}

/// Returns the start-of-shift instant for whichever shift contains `t`.
///
/// The result is on the same local calendar date as `t`, at the
/// containing shift's fixed start hour, with zero minutes and seconds,
/// in the same zone.
pub fn shift_start_for(t: DateTime<Tz>) -> DateTime<Tz> {
    let shift = shift_for(t);
    t.timezone()
        .with_ymd_and_hms(t.year(), t.month(), t.day(), shift.start_hour(), 0, 0)
        .single()
        .expect("Valid shift start in a fixed-offset zone")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ORG_TZ;
    use proptest::prelude::*;

    fn at(hour: u32, min: u32, sec: u32) -> DateTime<Tz> {
        ORG_TZ
            .with_ymd_and_hms(2024, 3, 10, hour, min, sec)
            .unwrap()
    }

    // ==========================================================================
    // SW-001: hours in [8, 16) are prime
    // ==========================================================================
    #[test]
    fn test_sw_001_morning_hours_are_prime() {
        assert_eq!(shift_for(at(8, 0, 0)), Shift::Prime);
        assert_eq!(shift_for(at(11, 45, 12)), Shift::Prime);
        assert_eq!(shift_for(at(15, 59, 59)), Shift::Prime);
    }

    // ==========================================================================
    // SW-002: hours in [16, 24) are midshift
    // ==========================================================================
    #[test]
    fn test_sw_002_evening_hours_are_midshift() {
        assert_eq!(shift_for(at(16, 0, 0)), Shift::Midshift);
        assert_eq!(shift_for(at(20, 30, 0)), Shift::Midshift);
        assert_eq!(shift_for(at(23, 59, 59)), Shift::Midshift);
    }

    // ==========================================================================
    // SW-003: hours in [0, 8) are closing
    // ==========================================================================
    #[test]
    fn test_sw_003_overnight_hours_are_closing() {
        assert_eq!(shift_for(at(0, 0, 0)), Shift::Closing);
        assert_eq!(shift_for(at(3, 15, 0)), Shift::Closing);
        assert_eq!(shift_for(at(7, 59, 59)), Shift::Closing);
    }

    // ==========================================================================
    // SW-004: boundary instants belong to the shift they start
    // ==========================================================================
    #[test]
    fn test_sw_004_boundaries_are_lower_bound_inclusive() {
        assert_eq!(shift_start_for(at(8, 0, 0)), at(8, 0, 0));
        assert_eq!(shift_start_for(at(16, 0, 0)), at(16, 0, 0));
        assert_eq!(shift_start_for(at(0, 0, 0)), at(0, 0, 0));
    }

    #[test]
    fn test_shift_start_keeps_date_and_zeroes_minutes() {
        let start = shift_start_for(at(14, 37, 22));
        assert_eq!(start, at(8, 0, 0));

        let start = shift_start_for(at(23, 59, 59));
        assert_eq!(start, at(16, 0, 0));

        let start = shift_start_for(at(5, 30, 0));
        assert_eq!(start, at(0, 0, 0));
    }

    #[test]
    fn test_shift_start_just_before_a_boundary_stays_in_prior_window() {
        assert_eq!(shift_start_for(at(7, 59, 59)), at(0, 0, 0));
        assert_eq!(shift_start_for(at(15, 59, 59)), at(8, 0, 0));
    }

    proptest! {
        // The three windows partition the day: every instant resolves to
        // exactly one shift, and its start is at most 8 hours behind.
        #[test]
        fn prop_shift_start_contains_the_instant(
            hour in 0u32..24,
            min in 0u32..60,
            sec in 0u32..60,
        ) {
            let t = at(hour, min, sec);
            let shift = shift_for(t);
            let start = shift_start_for(t);

            prop_assert_eq!(start.hour(), shift.start_hour());
            prop_assert_eq!(start.minute(), 0);
            prop_assert_eq!(start.second(), 0);
            prop_assert_eq!(start.date_naive(), t.date_naive());
            prop_assert!(start <= t);
            prop_assert!(t.signed_duration_since(start) < chrono::Duration::hours(8));
        }

        #[test]
        fn prop_each_hour_claimed_by_one_shift(hour in 0u32..24) {
            let t = at(hour, 0, 0);
            let claims = Shift::ALL
                .iter()
                .filter(|shift| shift_for(t) == **shift)
                .count();
            prop_assert_eq!(claims, 1);
        }
    }
}
