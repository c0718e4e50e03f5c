//! Service-level inputs
//!
//! These carry already-deserialized values into the orchestration layer.
//! Due dates stay as raw strings here so that parsing failures are reported
//! by validation rather than at deserialization time.

use super::Priority;

/// Fields for a task about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task text
    pub text: String,
    /// Task priority
    pub priority: Priority,
    /// Optional due date (`yyyy-MM-dd`); blank means none
    pub due_date: Option<String>,
}

impl NewTask {
    /// Create input without a due date
    #[must_use]
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self {
            text: text.into(),
            priority,
            due_date: None,
        }
    }

    /// Attach a due date
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Partial update of an existing task.
///
/// `None` leaves a field untouched. For `due_date`, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New text
    pub text: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// New due date, or blank to clear
    pub due_date: Option<String>,
}

impl TaskPatch {
    /// Whether the patch carries nothing to apply
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.priority.is_none()
            && self.due_date.as_deref().is_none_or(|d| d.trim().is_empty())
    }
}
