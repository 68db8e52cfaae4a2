//! Attendance records and the grouped board structure.

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::models::Shift;

/// A clock-in event carried with its shift and location context.
///
/// Timestamps are zone-aware instants in the organization zone; the
/// store adapter converts from the store's UTC representation on read.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockInRow {
    /// Shift the clock-in was recorded against.
    pub shift: Shift,
    /// Location key distinguishing buckets within the shift.
    pub location_key: String,
    /// Person who clocked in.
    pub name: String,
    /// Whether this entry covers for a different assignment.
    pub covering: bool,
    /// Local clock-in instant.
    pub clocked_in_at: DateTime<Tz>,
}

/// A single attendance entry as it appears in API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEntry {
    /// Person name.
    pub name: String,
    /// Local clock-in instant, serialized as ISO-8601 with offset.
    pub timestamp: DateTime<Tz>,
}

/// Regular and covering entries for one (shift, location) pair.
///
/// Both sequences preserve the order the store supplied (ascending
/// clock-in time); the grouping fold appends and never re-sorts. An
/// entry lands in exactly one of the two sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceBucket {
    /// People clocked in on their own assignment.
    pub users: Vec<AttendanceEntry>,
    /// People covering for a different assignment.
    pub covers: Vec<AttendanceEntry>,
}

/// Per-location buckets for one shift, keyed by location key.
pub type LocationMap = BTreeMap<String, AttendanceBucket>;

/// One business day of attendance, grouped by shift and location.
///
/// The outer mapping is a struct rather than a map so all three shift
/// keys serialize even when a shift has no clock-ins; downstream
/// consumers never face a missing-key case.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceBoard {
    /// Buckets for the prime shift.
    pub prime: LocationMap,
    /// Buckets for the midshift.
    pub midshift: LocationMap,
    /// Buckets for the closing shift.
    pub closing: LocationMap,
}

impl AttendanceBoard {
    /// Returns the location map for `shift`.
    pub fn shift(&self, shift: Shift) -> &LocationMap {
        match shift {
            Shift::Prime => &self.prime,
            Shift::Midshift => &self.midshift,
            Shift::Closing => &self.closing,
        }
    }

    /// Returns the location map for `shift`, mutably.
    pub fn shift_mut(&mut self, shift: Shift) -> &mut LocationMap {
        match shift {
            Shift::Prime => &mut self.prime,
            Shift::Midshift => &mut self.midshift,
            Shift::Closing => &mut self.closing,
        }
    }
}
