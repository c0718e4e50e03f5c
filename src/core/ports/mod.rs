//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the outside world. Implementations live in the `adapters` module.

mod clock;

pub use clock::Clock;
