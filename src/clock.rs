//! Time source for the dashboard.
//!
//! Every shift and business-day decision is made on an instant in the
//! organization's fixed time zone. The current time is an injected
//! dependency so the pure resolvers stay deterministic under test.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The organization's fixed time zone.
///
/// All timestamps that participate in shift or business-day resolution
/// are expressed in this zone before any boundary is derived. Operating
/// in a single zone is a hard design assumption, not configuration.
pub const ORG_TZ: Tz = chrono_tz::Asia::Manila;

/// A source of the current instant in the organization zone.
pub trait Clock: Send + Sync {
    /// Returns the current instant expressed in [`ORG_TZ`].
    fn now(&self) -> DateTime<Tz>;
}

/// A [`Clock`] backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&ORG_TZ)
    }
}
