//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or called directly from tests.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take a [`TodoService`](crate::service::TodoService)
//!   and typed input, return `Result<Outcome<T>, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation,
//!   and so does `Outcome` for the success side (200, 201, 304)

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode, ITEM_NOT_FOUND, UNEXPECTED_ERROR};
pub use handlers::{
    create_task, delete_task, get_stats, get_task, list_tasks, mark_done, mark_undone,
    parse_list_query, update_task,
};
pub use types::{
    ApiResponse, CreateTaskRequest, DeletedData, ListTasksQuery, Outcome, SuccessCode,
    UpdateTaskRequest,
};
