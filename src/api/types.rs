//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Short human-readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of matching items across all pages (list endpoints only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            total_items: None,
            error: None,
        }
    }

    /// Create a successful response from a handler outcome
    #[must_use]
    pub fn from_outcome(outcome: Outcome<T>) -> Self {
        Self {
            success: true,
            message: outcome.message,
            data: Some(outcome.data),
            total_items: outcome.total_items,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            data: None,
            total_items: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// HANDLER OUTCOMES
// =============================================================================

/// Success codes a handler can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessCode {
    /// Request served (200)
    #[default]
    Ok,
    /// Resource created (201)
    Created,
    /// Requested state already in effect, nothing changed (304)
    NotModified,
}

impl SuccessCode {
    /// Get the HTTP status code
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NotModified => 304,
        }
    }
}

/// Successful handler result: data plus how to report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    /// Success code (determines HTTP status)
    pub status: SuccessCode,
    /// Optional summary message
    pub message: Option<String>,
    /// Payload
    pub data: T,
    /// Total matches across pages, for list results
    pub total_items: Option<usize>,
}

impl<T> Outcome<T> {
    fn with_status(status: SuccessCode, data: T) -> Self {
        Self {
            status,
            message: None,
            data,
            total_items: None,
        }
    }

    /// 200 with data
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self::with_status(SuccessCode::Ok, data)
    }

    /// 201 with the created resource
    #[must_use]
    pub fn created(data: T) -> Self {
        Self::with_status(SuccessCode::Created, data)
    }

    /// 304 with the unchanged resource
    #[must_use]
    pub fn not_modified(data: T) -> Self {
        Self::with_status(SuccessCode::NotModified, data)
    }

    /// Attach a summary message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the total number of matches
    #[must_use]
    pub const fn with_total_items(mut self, total: usize) -> Self {
        self.total_items = Some(total);
        self
    }

    /// Get the HTTP status code
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status.status_code()
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a task
///
/// Every field is optional at the JSON level so that missing values are
/// reported with a field-specific message instead of a parser error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task text
    #[serde(default)]
    pub text: Option<String>,
    /// Priority (HIGH, MEDIUM, LOW)
    #[serde(default)]
    pub priority: Option<String>,
    /// Optional due date (`yyyy-MM-dd`)
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Request body for updating a task
///
/// Absent fields are left untouched; an empty `dueDate` clears the due date.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New text
    #[serde(default)]
    pub text: Option<String>,
    /// New priority
    #[serde(default)]
    pub priority: Option<String>,
    /// New due date, or empty to clear
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Raw list parameters as received from a query string
///
/// Values are kept as strings so handlers can report which one is malformed.
/// Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksQuery {
    /// Text filter
    pub text: Option<String>,
    /// Priority filter
    pub priority: Option<String>,
    /// Completion filter (`true` / `false`)
    pub is_done: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
    /// `priority` or `dueDate`
    pub sort_by: Option<String>,
    /// `asc` to reverse the default order
    pub order: Option<String>,
}

impl ListTasksQuery {
    /// Decode a URL query string (without the leading `?`)
    #[must_use]
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let value = Some(value.into_owned());
            match key.as_ref() {
                "text" => params.text = value,
                "priority" => params.priority = value,
                "isDone" | "done" => params.is_done = value,
                "page" => params.page = value,
                "sortBy" => params.sort_by = value,
                "order" => params.order = value,
                other => log::debug!("Ignoring unknown list parameter '{other}'"),
            }
        }
        params
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Short confirmation payload for deletions
#[derive(Debug, Serialize)]
pub struct DeletedData {
    /// ID of the deleted task
    pub id: String,
    /// Always true
    pub deleted: bool,
}
