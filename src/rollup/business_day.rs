//! Attendance business-day resolution.
//!
//! The attendance-tracking "day" is offset from the wall-clock calendar
//! date by an early-morning cutoff: overnight activity still belongs to
//! the day the closing shift opened on.

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

/// Returns the attendance business day for the instant `t`.
///
/// Local times strictly before 06:00 map to the previous calendar date;
/// 06:00:00 itself and everything after map to the current one. The
/// mapping is total and deterministic over all valid instants.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, TimeZone};
/// use shiftboard::clock::ORG_TZ;
/// use shiftboard::rollup::business_day_for;
///
/// let late = ORG_TZ.with_ymd_and_hms(2024, 3, 10, 5, 59, 59).unwrap();
/// assert_eq!(business_day_for(late), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
///
/// let morning = ORG_TZ.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap();
/// assert_eq!(business_day_for(morning), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// ```
pub fn business_day_for(t: DateTime<Tz>) -> NaiveDate {
    let cutoff = NaiveTime::from_hms_opt(6, 0, 0).expect("Valid cutoff time");
    if t.time() < cutoff {
        t.date_naive()
            .pred_opt()
            .expect("Date has a predecessor")
    } else {
        t.date_naive()
    }
}
