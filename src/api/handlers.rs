//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<Outcome<T>, ApiError>`.

use crate::core::TodoError;
use crate::core::models::{NewTask, Task, TaskPatch};
use crate::core::services::{
    CompletionStats, ListQuery, SortDirection, SortKey, TaskFilter, check_priority, check_text,
    parse_priority,
};
use crate::service::{StatusChange, TodoService};

use super::error::ApiError;
use super::types::{CreateTaskRequest, DeletedData, ListTasksQuery, Outcome, UpdateTaskRequest};

const INVALID_SORT_BY: &str =
    "Invalid value for 'sortBy'. Accepted values are 'priority' or 'dueDate'";

// =============================================================================
// QUERIES
// =============================================================================

/// List one page of tasks, with the number of matches across all pages
pub fn list_tasks(
    service: &TodoService,
    params: &ListTasksQuery,
) -> Result<Outcome<Vec<Task>>, ApiError> {
    let query = parse_list_query(params)?;
    let page = service.list_page(&query);
    Ok(Outcome::ok(page.tasks).with_total_items(page.total))
}

/// Get a single task by ID
pub fn get_task(service: &TodoService, id: &str) -> Result<Outcome<Task>, ApiError> {
    service.get_task(id).map(Outcome::ok).ok_or_else(ApiError::item_not_found)
}

/// Average completion times
#[must_use]
pub fn get_stats(service: &TodoService) -> Outcome<CompletionStats> {
    Outcome::ok(service.stats())
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Create a new task
pub fn create_task(
    service: &TodoService,
    req: &CreateTaskRequest,
) -> Result<Outcome<Task>, ApiError> {
    let input = NewTask {
        text: check_text(req.text.as_deref())?,
        priority: check_priority(req.priority.as_deref())?,
        due_date: req.due_date.clone(),
    };

    let task = service.add_task(&input)?;
    Ok(Outcome::created(task).with_message("Item successfully created"))
}

/// Apply a partial update to a task
pub fn update_task(
    service: &TodoService,
    id: &str,
    req: &UpdateTaskRequest,
) -> Result<Outcome<Task>, ApiError> {
    let patch = TaskPatch {
        text: req.text.as_deref().map(|t| check_text(Some(t))).transpose()?,
        priority: req.priority.as_deref().map(|p| parse_priority("priority", p)).transpose()?,
        due_date: req.due_date.clone(),
    };

    match service.update_task(id, &patch)? {
        Some(task) => Ok(Outcome::ok(task).with_message("Item successfully updated")),
        None => Err(ApiError::item_not_found()),
    }
}

/// Delete a task
pub fn delete_task(service: &TodoService, id: &str) -> Result<Outcome<DeletedData>, ApiError> {
    let task = service.delete_task(id).ok_or_else(ApiError::item_not_found)?;
    let data = DeletedData {
        id: task.id,
        deleted: true,
    };
    Ok(Outcome::ok(data).with_message("Item successfully deleted"))
}

/// Mark a task as done (304 if it already was)
pub fn mark_done(service: &TodoService, id: &str) -> Result<Outcome<Task>, ApiError> {
    let change = service.mark_done(id).ok_or_else(ApiError::item_not_found)?;
    Ok(status_outcome(change, "done"))
}

/// Reopen a task (304 if it was not done)
pub fn mark_undone(service: &TodoService, id: &str) -> Result<Outcome<Task>, ApiError> {
    let change = service.mark_undone(id).ok_or_else(ApiError::item_not_found)?;
    Ok(status_outcome(change, "undone"))
}

// =============================================================================
// HELPERS
// =============================================================================

fn status_outcome(change: StatusChange, state: &str) -> Outcome<Task> {
    match change {
        StatusChange::Applied(task) => {
            Outcome::ok(task).with_message(format!("Item marked as {state}"))
        },
        StatusChange::Unchanged(task) => Outcome::not_modified(task)
            .with_message(format!("The item is already marked as {state}.")),
    }
}

/// Turn raw list parameters into a [`ListQuery`], rejecting malformed values
pub fn parse_list_query(params: &ListTasksQuery) -> Result<ListQuery, ApiError> {
    let priority = params
        .priority
        .as_deref()
        .map(|p| parse_priority("priority", p))
        .transpose()?;

    let done = params.is_done.as_deref().map(parse_done_flag).transpose()?;

    let page = match params.page.as_deref() {
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| TodoError::MalformedNumber {
            field: "page",
            value: raw.to_string(),
        })?,
        None => 1,
    };

    let sort = match params.sort_by.as_deref() {
        Some(raw) if raw.eq_ignore_ascii_case("priority") || raw.eq_ignore_ascii_case("duedate") => {
            SortKey::from_param(Some(raw))
        },
        Some(_) => return Err(ApiError::bad_request(INVALID_SORT_BY)),
        None => SortKey::default(),
    };

    Ok(ListQuery {
        filter: TaskFilter {
            text: params.text.clone(),
            priority,
            done,
        },
        page,
        sort,
        direction: SortDirection::from_param(params.order.as_deref()),
    })
}

fn parse_done_flag(raw: &str) -> Result<bool, TodoError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(TodoError::MalformedEnum {
            field: "isDone",
            value: raw.to_string(),
            accepted: "true, false".to_string(),
        })
    }
}
