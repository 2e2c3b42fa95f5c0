//! Live clock using the system calendar.

use chrono::{Local, NaiveDate};

use crate::ports::clock::Clock;

/// Live clock that returns today's date in the local timezone.
pub struct LiveClock;

impl Clock for LiveClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
