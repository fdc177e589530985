//! Minimal HTTP/1.1 asset server for integration tests.
//!
//! Serves a fixed set of paths. Unknown paths get 404. Each GET is counted
//! so tests can check how often the origin was hit.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// One canned answer.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Written verbatim instead of a well-formed response, then the connection closes.
    pub raw: Option<Vec<u8>>,
}

impl Route {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: "200 OK",
            headers: Vec::new(),
            body,
            raw: None,
        }
    }

    pub fn status(status: &'static str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: b"error page".to_vec(),
            raw: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: "302 Found",
            headers: vec![("Location".to_string(), location.to_string())],
            body: Vec::new(),
            raw: None,
        }
    }

    pub fn raw(response: &[u8]) -> Self {
        Self {
            status: "",
            headers: Vec::new(),
            body: Vec::new(),
            raw: Some(response.to_vec()),
        }
    }
}

pub struct AssetServer {
    /// e.g. "http://127.0.0.1:12345" (no trailing slash).
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl AssetServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> AssetServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    AssetServer {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

/// A base URL nothing listens on: bind an ephemeral port and release it.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    hits.fetch_add(1, Ordering::SeqCst);

    let not_found = Route::status("404 Not Found");
    let route = routes.get(path).unwrap_or(&not_found);
    if let Some(raw) = &route.raw {
        let _ = stream.write_all(raw);
        return;
    }
    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    for (name, value) in &route.headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}
