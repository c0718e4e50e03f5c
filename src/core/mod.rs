//! Core domain logic for todoapp
//!
//! This module contains pure business logic with no I/O dependencies.
//! External interactions (the clock) are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Priority, inputs)
//! - `services/` - Validation, search and statistics
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Domain error kinds

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::TodoError;
