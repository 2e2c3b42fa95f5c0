//! Fixed adapters that pin otherwise ambient values.

pub mod clock;

pub use clock::FixedClock;
