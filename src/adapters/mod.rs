//! Adapter implementations of the port traits.
//!
//! `live` talks to the real system, `fixed` pins values for reproducible
//! runs, and `memory` keeps everything in process for tests.

pub mod fixed;
pub mod live;
pub mod memory;
