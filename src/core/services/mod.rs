//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies: they operate on data passed in and return results.
//!
//! - [`validation`] - Business and request-shape rules for task input
//! - [`search`] - Filtering, sorting and pagination of the task list
//! - [`stats`] - Average completion times

pub mod search;
pub mod stats;
pub mod validation;

pub use search::{ListQuery, SortDirection, SortKey, TaskFilter, list_view, total_count};
pub use stats::{CompletionStats, STAT_KEYS, completion_stats, format_duration};
pub use validation::{
    DueDateChange, MAX_TEXT_LEN, check_priority, check_text, parse_due_date, parse_priority,
    validate_new_task, validate_task_patch,
};
