//! Adapter implementations for port traits
//!
//! - [`SystemClock`] - wall-clock time for the [`Clock`](crate::core::ports::Clock) port

mod clock;

pub use clock::SystemClock;
