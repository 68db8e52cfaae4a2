//! Attendance grouping fold.

use crate::models::{AttendanceBoard, AttendanceEntry, ClockInRow};

/// Folds ordered clock-in rows into the per-shift, per-location board.
///
/// Rows must arrive in the store's (shift, location key, covering flag,
/// clock-in time) order; the fold appends in arrival order and never
/// re-sorts, so that ordering is preserved inside every bucket's two
/// sequences. Regular entries go to `users`, covering entries to
/// `covers`, and each row lands in exactly one of the two.
///
/// All three shifts are present in the result even when empty; location
/// buckets are created on first sight of a location key.
pub fn group_clock_ins(rows: Vec<ClockInRow>) -> AttendanceBoard {
    let mut board = AttendanceBoard::default();

    for row in rows {
        let bucket = board
            .shift_mut(row.shift)
            .entry(row.location_key)
            .or_default();

        let entry = AttendanceEntry {
            name: row.name,
            timestamp: row.clocked_in_at,
        };
        if row.covering {
            bucket.covers.push(entry);
        } else {
            bucket.users.push(entry);
        }
    }

    board
}
