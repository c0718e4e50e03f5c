//! Use-case orchestration
//!
//! [`TodoService`] owns the task store and composes validation, search and
//! statistics into one operation per use case. Validation always runs before
//! the store is touched.
//!
//! The store sits behind a single lock that is held for the whole of each
//! operation, so find-then-mutate and find-then-remove sequences are atomic
//! with respect to other request threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::adapters::SystemClock;
use crate::core::TodoError;
use crate::core::models::{NewTask, Task, TaskPatch};
use crate::core::ports::Clock;
use crate::core::services::{
    CompletionStats, DueDateChange, ListQuery, TaskFilter, completion_stats, list_view,
    total_count, validate_new_task, validate_task_patch,
};
use crate::storage::TaskStore;

/// Default number of tasks per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Result of a mark-done / mark-undone request on an existing task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    /// The task changed state
    Applied(Task),
    /// The task was already in the requested state and was left untouched
    Unchanged(Task),
}

impl StatusChange {
    /// Whether the task changed state
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The task after the request
    #[must_use]
    pub const fn task(&self) -> &Task {
        match self {
            Self::Applied(task) | Self::Unchanged(task) => task,
        }
    }

    /// Take the task out
    #[must_use]
    pub fn into_task(self) -> Task {
        match self {
            Self::Applied(task) | Self::Unchanged(task) => task,
        }
    }
}

/// One page of the list together with the number of matching tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPage {
    /// Tasks on the requested page
    pub tasks: Vec<Task>,
    /// Tasks matching the filter across all pages
    pub total: usize,
}

/// Task list use cases over one shared in-memory store
#[derive(Debug)]
pub struct TodoService {
    store: Mutex<TaskStore>,
    clock: Arc<dyn Clock>,
    page_size: usize,
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TodoService {
    /// Create a service with an empty store and the system clock
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self::with_clock(page_size, Arc::new(SystemClock))
    }

    /// Create a service with an empty store and the given clock
    #[must_use]
    pub fn with_clock(page_size: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(TaskStore::new()),
            clock,
            page_size: page_size.max(1),
        }
    }

    /// Tasks per page
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of tasks in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Get a task by ID
    #[must_use]
    pub fn get_task(&self, id: &str) -> Option<Task> {
        self.store.lock().find(id).cloned()
    }

    /// Validate and create a task
    pub fn add_task(&self, input: &NewTask) -> Result<Task, TodoError> {
        let due_date = validate_new_task(input, self.clock.today())?;
        let task = Task::new(input.text.clone(), input.priority, due_date, self.clock.now());

        self.store
            .lock()
            .add(task.clone())
            .map_err(|e| TodoError::Internal(e.to_string()))?;

        log::info!("Created task {}", task.id);
        Ok(task)
    }

    /// Validate and apply a partial update.
    ///
    /// Returns `Ok(None)` if no task has this ID. Validation runs first, so an
    /// invalid patch fails even for an unknown ID.
    pub fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Option<Task>, TodoError> {
        let due_date = validate_task_patch(patch, self.clock.today())?;

        let mut store = self.store.lock();
        let Some(task) = store.find_mut(id) else {
            return Ok(None);
        };

        if let Some(text) = &patch.text {
            task.text.clone_from(text);
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        match due_date {
            DueDateChange::Keep => {},
            DueDateChange::Clear => task.due_date = None,
            DueDateChange::Set(date) => task.due_date = Some(date),
        }

        log::info!("Updated task {id}");
        Ok(Some(task.clone()))
    }

    /// Mark a task as done; repeating it is a no-op signalled as [`StatusChange::Unchanged`]
    #[must_use]
    pub fn mark_done(&self, id: &str) -> Option<StatusChange> {
        let now = self.clock.now();
        let mut store = self.store.lock();
        let task = store.find_mut(id)?;

        if task.mark_done(now) {
            log::info!("Marked task {id} as done");
            Some(StatusChange::Applied(task.clone()))
        } else {
            log::debug!("Task {id} is already done");
            Some(StatusChange::Unchanged(task.clone()))
        }
    }

    /// Reopen a task; repeating it is a no-op signalled as [`StatusChange::Unchanged`]
    #[must_use]
    pub fn mark_undone(&self, id: &str) -> Option<StatusChange> {
        let mut store = self.store.lock();
        let task = store.find_mut(id)?;

        if task.mark_undone() {
            log::info!("Marked task {id} as undone");
            Some(StatusChange::Applied(task.clone()))
        } else {
            log::debug!("Task {id} is already open");
            Some(StatusChange::Unchanged(task.clone()))
        }
    }

    /// Delete a task, returning it if it existed
    #[must_use]
    pub fn delete_task(&self, id: &str) -> Option<Task> {
        let removed = self.store.lock().remove(id);
        if removed.is_some() {
            log::info!("Deleted task {id}");
        }
        removed
    }

    /// One page of matching tasks, sorted
    #[must_use]
    pub fn list_tasks(&self, query: &ListQuery) -> Vec<Task> {
        let store = self.store.lock();
        list_view(store.as_slice(), query, self.page_size).into_iter().cloned().collect()
    }

    /// Number of tasks matching `filter`
    #[must_use]
    pub fn count_tasks(&self, filter: &TaskFilter) -> usize {
        total_count(self.store.lock().as_slice(), filter)
    }

    /// One page plus the total match count, computed under one lock
    #[must_use]
    pub fn list_page(&self, query: &ListQuery) -> TaskPage {
        let store = self.store.lock();
        let tasks = list_view(store.as_slice(), query, self.page_size).into_iter().cloned().collect();
        let total = total_count(store.as_slice(), &query.filter);
        TaskPage { tasks, total }
    }

    /// Average completion times over the whole store
    #[must_use]
    pub fn stats(&self) -> CompletionStats {
        completion_stats(self.store.lock().as_slice())
    }
}
