//! todoapp - An in-memory task list backend
//!
//! This library provides the task model, validation, filtering/sorting/paging,
//! completion statistics and the orchestration service, plus an HTTP-agnostic
//! API layer and a `tiny_http` adapter (behind the `server` feature).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod paths;
pub mod service;
pub mod storage;

#[cfg(feature = "server")]
pub mod server;

pub use config::AppConfig;
pub use service::TodoService;
