//! End-to-end lifecycle over HTTP
//!
//! Starts the real server on a free port and drives it with raw HTTP/1.1
//! requests: create → list → done → done again → stats → delete.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use assert_cmd::cargo;
use serde_json::Value;
use tempfile::TempDir;

/// Kills the server when the test ends, pass or fail
struct ServerGuard {
    child: Child,
    port: u16,
    _dir: TempDir,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port()
}

fn start_server() -> ServerGuard {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("todoapp.toml");
    std::fs::write(&config, "[list]\npage_size = 2\n").unwrap();
    let port = free_port();

    let child = Command::new(cargo::cargo_bin!("todoapp"))
        .args(["--config", &config.to_string_lossy(), "serve", "--port", &port.to_string()])
        .args(["--workers", "2"])
        .env_remove("TODOAPP_PORT")
        .env_remove("TODOAPP_BIND")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while TcpStream::connect(("127.0.0.1", port)).is_err() {
        assert!(Instant::now() < deadline, "server did not start on port {port}");
        thread::sleep(Duration::from_millis(50));
    }

    ServerGuard {
        child,
        port,
        _dir: dir,
    }
}

/// Send one request and return the status code, raw headers and body
fn request(port: u16, method: &str, path: &str, body: Option<&str>) -> (u16, String, String) {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
    let body = body.unwrap_or("");
    write!(
        stream,
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    )
    .unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();
    let (head, body) = raw.split_once("\r\n\r\n").unwrap_or((raw.as_str(), ""));
    let status = head.split_whitespace().nth(1).unwrap().parse().unwrap();
    (status, head.to_string(), body.to_string())
}

fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[test]
fn test_http_lifecycle() {
    let server = start_server();
    let port = server.port;

    // Create three tasks
    let mut ids = Vec::new();
    for (text, priority) in [("Low one", "LOW"), ("High one", "HIGH"), ("Medium one", "MEDIUM")] {
        let body = format!(r#"{{"text":"{text}","priority":"{priority}"}}"#);
        let (status, head, body) = request(port, "POST", "/todos", Some(&body));
        assert_eq!(status, 201, "{body}");
        assert!(head.contains("Access-Control-Allow-Origin: *"));
        ids.push(json(&body)["data"]["id"].as_str().unwrap().to_string());
    }

    // First page is sorted by priority and capped at the configured size
    let (status, _, body) = request(port, "GET", "/api/todos", None);
    assert_eq!(status, 200);
    let page = json(&body);
    assert_eq!(page["totalItems"], 3);
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
    assert_eq!(page["data"][0]["text"], "High one");

    // Done, then done again
    let done_path = format!("/todos/{}/done", ids[1]);
    assert_eq!(request(port, "POST", &done_path, None).0, 200);
    assert_eq!(request(port, "POST", &done_path, None).0, 304);

    // Stats reflect the completed task
    let (status, _, body) = request(port, "GET", "/todos/stats", None);
    assert_eq!(status, 200);
    assert!(json(&body)["data"]["averageTimeHighPriority"].is_string());

    // Delete, then delete again
    let item = format!("/todos/{}", ids[0]);
    assert_eq!(request(port, "DELETE", &item, None).0, 200);
    assert_eq!(request(port, "DELETE", &item, None).0, 404);

    // Preflight
    let (status, head, _) = request(port, "OPTIONS", "/todos", None);
    assert_eq!(status, 204);
    assert!(head.contains("Access-Control-Allow-Methods"));
}
