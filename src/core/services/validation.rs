//! Validation rules for task input
//!
//! Two kinds of rules live here:
//!
//! - business rules ([`validate_new_task`], [`validate_task_patch`]) that the
//!   orchestration layer runs before any mutation
//! - request-shape rules ([`check_text`], [`check_priority`]) that the API
//!   layer runs while turning request bodies into service inputs
//!
//! All functions are pure; "today" is passed in.

use chrono::NaiveDate;

use crate::core::error::{NOTHING_TO_UPDATE, PAST_DUE_DATE, TodoError};
use crate::core::models::{NewTask, Priority, TaskPatch};

/// Maximum length of a task's text, in characters
pub const MAX_TEXT_LEN: usize = 120;

/// Wire format of due dates
const DATE_FORMAT: &str = "%Y-%m-%d";

/// What an update does to the due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateChange {
    /// Field absent: leave the due date as it is
    Keep,
    /// Field present but blank: remove the due date
    Clear,
    /// Field present: replace the due date
    Set(NaiveDate),
}

/// Parse a `yyyy-MM-dd` date.
///
/// Blank input means "no date". Anything else must be exactly ten characters
/// and a real calendar date.
pub fn parse_due_date(field: &'static str, raw: &str) -> Result<Option<NaiveDate>, TodoError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let malformed = || TodoError::MalformedDate {
        field,
        value: raw.to_string(),
    };

    if trimmed.len() != 10 {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map(Some).map_err(|_| malformed())
}

fn ensure_not_past(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, TodoError> {
    if date < today {
        return Err(TodoError::invalid_argument(PAST_DUE_DATE));
    }
    Ok(date)
}

/// Validate a task about to be created.
///
/// Returns the parsed due date so callers do not parse it twice.
pub fn validate_new_task(input: &NewTask, today: NaiveDate) -> Result<Option<NaiveDate>, TodoError> {
    match input.due_date.as_deref() {
        Some(raw) => parse_due_date("dueDate", raw)?
            .map(|date| ensure_not_past(date, today))
            .transpose(),
        None => Ok(None),
    }
}

/// Validate a partial update.
///
/// An update must change at least one of text, priority or due date; a blank
/// due date on its own does not count.
pub fn validate_task_patch(patch: &TaskPatch, today: NaiveDate) -> Result<DueDateChange, TodoError> {
    if patch.is_empty() {
        return Err(TodoError::invalid_argument(NOTHING_TO_UPDATE));
    }

    let Some(raw) = patch.due_date.as_deref() else {
        return Ok(DueDateChange::Keep);
    };

    match parse_due_date("dueDate", raw)? {
        Some(date) => ensure_not_past(date, today).map(DueDateChange::Set),
        None => Ok(DueDateChange::Clear),
    }
}

/// Check a task's text: required, non-blank, at most [`MAX_TEXT_LEN`] characters
pub fn check_text(text: Option<&str>) -> Result<String, TodoError> {
    let text = text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(TodoError::invalid_argument("A description of the task is required"));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(TodoError::invalid_argument(format!(
            "The description size is limited to {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(text.to_string())
}

/// Check a task's priority: required and one of the known levels
pub fn check_priority(priority: Option<&str>) -> Result<Priority, TodoError> {
    let raw = priority.ok_or_else(|| TodoError::invalid_argument("A priority is required"))?;
    parse_priority("priority", raw)
}

/// Parse a priority, naming `field` and the accepted values on failure
pub fn parse_priority(field: &'static str, raw: &str) -> Result<Priority, TodoError> {
    raw.parse().map_err(|_| TodoError::MalformedEnum {
        field,
        value: raw.to_string(),
        accepted: Priority::accepted_values(),
    })
}
