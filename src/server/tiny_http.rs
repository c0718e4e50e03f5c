//! tiny_http server adapter
//!
//! Handles routing, query and body parsing, and response conversion for
//! tiny_http. Routing itself is a plain function over method, URL and body
//! ([`route`]) so it can be driven without a socket.

use std::io::{Cursor, Read};
use std::sync::Arc;
use std::thread;

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{
    self, ApiError, ApiResponse, CreateTaskRequest, ListTasksQuery, Outcome, UpdateTaskRequest,
};
use crate::config::AppConfig;
use crate::service::TodoService;

const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Status and JSON body produced by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// Serialized JSON body (empty for 204)
    pub body: String,
}

impl HttpReply {
    const fn no_content() -> Self {
        Self {
            status: 204,
            body: String::new(),
        }
    }
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Bind the configured address and serve requests until the process exits.
///
/// Each worker thread pulls requests from the shared listener and dispatches
/// them against the same [`TodoService`].
pub fn serve(config: &AppConfig, service: Arc<TodoService>) -> anyhow::Result<()> {
    let addr = config.server.socket_addr();
    let server = Server::http(&addr)
        .map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
    let server = Arc::new(server);

    let cors_origin: Option<Arc<str>> = config.server.cors_origin().map(Arc::from);
    let workers = config.server.workers.max(1);
    log::info!("Listening on http://{addr} with {workers} worker(s)");

    let mut handles = Vec::with_capacity(workers);
    for index in 0..workers {
        let server = Arc::clone(&server);
        let service = Arc::clone(&service);
        let cors_origin = cors_origin.clone();

        let handle = thread::Builder::new()
            .name(format!("http-worker-{index}"))
            .spawn(move || worker_loop(&server, &service, cors_origin.as_deref()))?;
        handles.push(handle);
    }

    for handle in handles {
        if handle.join().is_err() {
            log::error!("HTTP worker panicked");
        }
    }

    Ok(())
}

fn worker_loop(server: &Server, service: &TodoService, cors_origin: Option<&str>) {
    loop {
        match server.recv() {
            Ok(mut request) => {
                let response = handle_api_request(&mut request, service, cors_origin);
                if let Err(e) = request.respond(response) {
                    log::warn!("Failed to write response: {e}");
                }
            },
            Err(e) => {
                log::error!("Failed to receive request: {e}");
                break;
            },
        }
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
pub fn handle_api_request(
    request: &mut Request,
    service: &TodoService,
    cors_origin: Option<&str>,
) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();

    let reply = route(&method, &url, request.as_reader(), service);

    let mut response = Response::from_data(reply.body.into_bytes())
        .with_status_code(StatusCode(reply.status));
    add_header(&mut response, "Content-Type", "application/json");
    if let Some(origin) = cors_origin {
        add_header(&mut response, "Access-Control-Allow-Origin", origin);
        add_header(&mut response, "Access-Control-Allow-Methods", ALLOWED_METHODS);
        add_header(&mut response, "Access-Control-Allow-Headers", ALLOWED_HEADERS);
    }
    response
}

/// Map a method and URL to a handler and render its result.
///
/// Accepts `/todos`, `/api/todos` and `/api/v1/todos` as the base path.
pub fn route(method: &Method, url: &str, body: &mut dyn Read, service: &TodoService) -> HttpReply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    log::debug!("{method} {api_path}");

    if *method == Method::Options {
        return HttpReply::no_content();
    }

    let Some(rest) = api_path
        .strip_prefix("/todos")
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
    else {
        return not_found_reply(method, api_path);
    };
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    match (method, segments.as_slice()) {
        (Method::Get, []) => {
            let params = ListTasksQuery::from_query_string(query);
            handle_result(api::list_tasks(service, &params))
        },
        (Method::Post, []) => match read_json_body::<CreateTaskRequest>(body) {
            Ok(req) => handle_result(api::create_task(service, &req)),
            Err(e) => error_reply(&e),
        },
        (Method::Get, ["stats"]) => success_reply(api::get_stats(service)),
        (Method::Get, [id]) => handle_result(api::get_task(service, id)),
        (Method::Put | Method::Patch, [id]) => match read_json_body::<UpdateTaskRequest>(body) {
            Ok(req) => handle_result(api::update_task(service, id, &req)),
            Err(e) => error_reply(&e),
        },
        (Method::Delete, [id]) => handle_result(api::delete_task(service, id)),
        (Method::Post | Method::Put, [id, "done"]) => handle_result(api::mark_done(service, id)),
        (Method::Post | Method::Put, [id, "undone"]) => {
            handle_result(api::mark_undone(service, id))
        },
        _ => not_found_reply(method, api_path),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(body: &mut dyn Read) -> Result<T, ApiError> {
    let mut raw = String::new();
    body.read_to_string(&mut raw)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&raw).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to a reply
fn handle_result<T: Serialize>(result: Result<Outcome<T>, ApiError>) -> HttpReply {
    match result {
        Ok(outcome) => success_reply(outcome),
        Err(e) => error_reply(&e),
    }
}

fn success_reply<T: Serialize>(outcome: Outcome<T>) -> HttpReply {
    let status = outcome.status_code();
    json_reply(&ApiResponse::from_outcome(outcome), status)
}

fn error_reply(error: &ApiError) -> HttpReply {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_reply(&response, error.status_code())
}

fn not_found_reply(method: &Method, path: &str) -> HttpReply {
    error_reply(&ApiError::not_found(format!("API endpoint not found: {method} {path}")))
}

fn json_reply<T: Serialize>(data: &T, status: u16) -> HttpReply {
    let body = serde_json::to_string(data).unwrap_or_else(|e| {
        log::error!("Failed to serialize response: {e}");
        r#"{"success":false}"#.to_string()
    });
    HttpReply { status, body }
}

fn add_header(response: &mut Response<Cursor<Vec<u8>>>, name: &str, value: &str) {
    match Header::from_bytes(name, value) {
        Ok(header) => response.add_header(header),
        Err(()) => log::warn!("Skipping invalid header {name}: {value}"),
    }
}
