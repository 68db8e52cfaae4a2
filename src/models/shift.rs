//! Operational shift model.

use serde::{Deserialize, Serialize};

/// One of the three fixed 8-hour windows tiling the local day.
///
/// The windows partition every local time-of-day exactly once, with no
/// gap and no overlap: `prime` covers [08:00, 16:00), `midshift` covers
/// [16:00, 24:00) and `closing` covers [00:00, 08:00). Lower bounds are
/// inclusive, so 08:00 belongs to `prime` and midnight to `closing`.
///
/// # Example
///
/// ```
/// use shiftboard::models::Shift;
///
/// assert_eq!(Shift::Prime.label(), "prime");
/// assert_eq!(Shift::Midshift.start_hour(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Shift {
    /// Day window, 08:00 to 16:00 local.
    Prime,
    /// Evening window, 16:00 to midnight local.
    Midshift,
    /// Overnight window, midnight to 08:00 local.
    Closing,
}

impl Shift {
    /// All three shifts, in start-of-day order.
    pub const ALL: [Shift; 3] = [Shift::Closing, Shift::Prime, Shift::Midshift];

    /// The local hour at which this shift's window starts.
    pub fn start_hour(self) -> u32 {
        match self {
            Shift::Prime => 8,
            Shift::Midshift => 16,
            Shift::Closing => 0,
        }
    }

    /// The lowercase label used on the wire and in store rows.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Prime => "prime",
            Shift::Midshift => "midshift",
            Shift::Closing => "closing",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_wire_names() {
        assert_eq!(Shift::Prime.label(), "prime");
        assert_eq!(Shift::Midshift.label(), "midshift");
        assert_eq!(Shift::Closing.label(), "closing");
    }

    #[test]
    fn test_start_hours() {
        assert_eq!(Shift::Prime.start_hour(), 8);
        assert_eq!(Shift::Midshift.start_hour(), 16);
        assert_eq!(Shift::Closing.start_hour(), 0);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(format!("{}", Shift::Midshift), "midshift");
    }

    #[test]
    fn test_serialization_is_lowercase() {
        let json = serde_json::to_string(&Shift::Prime).unwrap();
        assert_eq!(json, "\"prime\"");

        let deserialized: Shift = serde_json::from_str("\"closing\"").unwrap();
        assert_eq!(deserialized, Shift::Closing);
    }

    #[test]
    fn test_all_lists_each_shift_once() {
        assert_eq!(Shift::ALL.len(), 3);
        assert!(Shift::ALL.contains(&Shift::Prime));
        assert!(Shift::ALL.contains(&Shift::Midshift));
        assert!(Shift::ALL.contains(&Shift::Closing));
    }
}
