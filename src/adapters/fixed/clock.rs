//! Clock pinned to a single date.

use chrono::NaiveDate;

use crate::ports::clock::Clock;

/// Clock that always reports the same date.
///
/// Used for `--today` / `PACKMAP_TODAY` overrides and in tests.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
