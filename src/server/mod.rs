//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight threaded HTTP server

pub mod tiny_http;

pub use self::tiny_http::{HttpReply, handle_api_request, route, serve};
