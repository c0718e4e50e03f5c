//! Filtered, sorted and paginated views of the task list
//!
//! Sorting picks a key with its natural comparator, then reverses that
//! comparator when the caller asked for `asc`. The natural comparators are:
//!
//! - priority: domain order, `HIGH` first
//! - due date: earliest first, tasks without a due date last
//!
//! So the default direction lists urgent work first, and `order=asc` flips it.
//! Tasks without a due date stay last in both directions. Sorting is stable,
//! ties keep insertion order.

use std::cmp::Ordering;

use crate::core::models::{Priority, Task};

/// Predicate over tasks; every absent criterion matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring of the task text
    pub text: Option<String>,
    /// Exact priority
    pub priority: Option<Priority>,
    /// Completion state
    pub done: Option<bool>,
}

impl TaskFilter {
    /// Whether `task` satisfies every present criterion
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.text
            .as_deref()
            .is_none_or(|needle| task.text.to_lowercase().contains(&needle.to_lowercase()))
            && self.priority.is_none_or(|p| task.priority == p)
            && self.done.is_none_or(|d| task.is_done == d)
    }
}

/// Field a list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Domain order of priorities
    #[default]
    Priority,
    /// Due date, missing dates last
    DueDate,
}

impl SortKey {
    /// Interpret a `sortBy` parameter; anything other than `duedate` sorts by priority
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(p) if p.eq_ignore_ascii_case("duedate") => Self::DueDate,
            _ => Self::Priority,
        }
    }

    fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Priority => a.priority.cmp(&b.priority),
            Self::DueDate => match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Whether the natural comparator is applied as is or reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Natural comparator (the default)
    #[default]
    Descending,
    /// Reversed comparator, selected by `order=asc`
    Ascending,
}

impl SortDirection {
    /// Interpret an `order` parameter; only `asc` reverses
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(p) if p.eq_ignore_ascii_case("asc") => Self::Ascending,
            _ => Self::Descending,
        }
    }
}

/// Everything needed to compute one page of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Which tasks to include
    pub filter: TaskFilter,
    /// 1-based page number; values below 1 mean the first page
    pub page: i64,
    /// Sort key
    pub sort: SortKey,
    /// Sort direction
    pub direction: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: TaskFilter::default(),
            page: 1,
            sort: SortKey::default(),
            direction: SortDirection::default(),
        }
    }
}

impl ListQuery {
    /// Number of tasks to skip before the requested page
    #[must_use]
    pub fn offset(&self, page_size: usize) -> usize {
        let index = usize::try_from(self.page.max(1) - 1).unwrap_or(usize::MAX);
        index.saturating_mul(page_size)
    }
}

fn compare(a: &Task, b: &Task, sort: SortKey, direction: SortDirection) -> Ordering {
    if sort == SortKey::DueDate {
        // Undated tasks trail in both directions.
        match (a.due_date.is_some(), b.due_date.is_some()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {},
        }
    }
    let natural = sort.compare(a, b);
    match direction {
        SortDirection::Descending => natural,
        SortDirection::Ascending => natural.reverse(),
    }
}

/// Filter, sort and paginate `tasks`
#[must_use]
pub fn list_view<'a>(tasks: &'a [Task], query: &ListQuery, page_size: usize) -> Vec<&'a Task> {
    let mut matching: Vec<&Task> = tasks.iter().filter(|t| query.filter.matches(t)).collect();
    matching.sort_by(|a, b| compare(a, b, query.sort, query.direction));
    matching.into_iter().skip(query.offset(page_size)).take(page_size).collect()
}

/// Number of tasks matching `filter`, ignoring sort and pagination
#[must_use]
pub fn total_count(tasks: &[Task], filter: &TaskFilter) -> usize {
    tasks.iter().filter(|t| filter.matches(t)).count()
}
