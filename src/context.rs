//! Service context bundling all port trait objects.

use chrono::NaiveDate;

use crate::adapters::fixed::FixedClock;
use crate::adapters::live::{LiveClock, LiveFileSystem};
use crate::adapters::memory::MemoryFileSystem;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, fixed-date, in-memory).
pub struct ServiceContext {
    /// Clock for obtaining the run date.
    pub clock: Box<dyn Clock>,
    /// Filesystem for pack I/O.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, fs: Box<dyn FileSystem>) -> Self {
        Self { clock, fs }
    }

    /// Creates a live context backed by the system clock and the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveClock), Box::new(LiveFileSystem))
    }

    /// Creates a context on the real disk whose clock is pinned to `today`.
    #[must_use]
    pub fn live_on(today: NaiveDate) -> Self {
        Self::new(Box::new(FixedClock(today)), Box::new(LiveFileSystem))
    }

    /// Creates a context over an in-memory filesystem with a pinned clock.
    #[must_use]
    pub fn in_memory(today: NaiveDate, fs: MemoryFileSystem) -> Self {
        Self::new(Box::new(FixedClock(today)), Box::new(fs))
    }
}
