//! Domain models for todoapp
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A todo item and its lifecycle
//! - [`Priority`] - How urgent a task is (`HIGH < MEDIUM < LOW`)
//! - [`NewTask`] / [`TaskPatch`] - Inputs for creating and updating tasks

mod input;
mod priority;
mod task;

pub use input::{NewTask, TaskPatch};
pub use priority::Priority;
pub use task::{Task, TaskStatus};
