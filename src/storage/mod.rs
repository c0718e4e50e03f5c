//! Storage for tasks
//!
//! State lives in process memory only and is lost on restart.

/// In-memory task storage
pub mod task;

pub use task::TaskStore;
