//! Task storage
//!
//! Holds every live task in insertion order. Lookups are linear; the list is
//! expected to stay small.

use crate::core::models::Task;

/// The authoritative in-memory collection of tasks
///
/// Not synchronized: callers that share it across threads wrap it in a lock
/// and hold that lock across find-then-mutate sequences.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Find a task by ID
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by ID for in-place mutation
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a task whose ID is not yet in the store
    pub fn add(&mut self, task: Task) -> anyhow::Result<()> {
        if self.find(&task.id).is_some() {
            anyhow::bail!("Task ID already in use: {}", task.id);
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Remove a task by ID, returning it if it existed
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// All tasks in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
