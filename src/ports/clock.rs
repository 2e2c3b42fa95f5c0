//! Clock port for obtaining the run date.

use chrono::NaiveDate;

/// Provides the date a generation run is stamped with.
///
/// Staleness and the generated-on notices are computed against this date,
/// so substituting a fixed clock makes output reproducible.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}
