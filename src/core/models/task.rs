//! Task model
//!
//! A task is a single todo item. It moves between two states:
//! `Open --mark done--> Done --mark undone--> Open`. Deleting a task removes
//! it from the store rather than moving it to a terminal state.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Priority;

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier (UUID v4), immutable once assigned
    pub id: String,

    /// What needs to be done
    pub text: String,

    /// How urgent it is
    pub priority: Priority,

    /// Optional calendar due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    /// Whether the task has been completed
    #[serde(default)]
    pub is_done: bool,

    /// When the task was completed; present exactly when `is_done` is set
    #[serde(default)]
    pub done_date: Option<DateTime<Utc>>,

    /// When the task was created
    pub creation_date: DateTime<Utc>,
}

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Not yet completed
    #[default]
    Open,
    /// Completed
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Done => write!(f, "done"),
        }
    }
}

impl Task {
    /// Create an open task with a freshly generated id
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            priority,
            due_date,
            is_done: false,
            done_date: None,
            creation_date: created_at,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        if self.is_done { TaskStatus::Done } else { TaskStatus::Open }
    }

    /// Mark the task as done at `at`.
    ///
    /// Returns `false` without touching anything if the task was already done.
    /// The completion instant never precedes the creation instant.
    pub fn mark_done(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_done {
            return false;
        }
        self.is_done = true;
        self.done_date = Some(at.max(self.creation_date));
        true
    }

    /// Reopen the task.
    ///
    /// Returns `false` without touching anything if the task was already open.
    pub fn mark_undone(&mut self) -> bool {
        if !self.is_done {
            return false;
        }
        self.is_done = false;
        self.done_date = None;
        true
    }

    /// Time between creation and completion, if the task is done
    #[must_use]
    pub fn completion_time(&self) -> Option<TimeDelta> {
        if !self.is_done {
            return None;
        }
        self.done_date.map(|done| done - self.creation_date)
    }
}
