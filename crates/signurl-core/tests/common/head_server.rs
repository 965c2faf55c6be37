//! Minimal HTTP/1.1 server that answers HEAD requests for integration tests.
//!
//! Every request gets the same configured status and optional `Location`.
//! The `Authorization` header of each request is recorded so tests can see
//! which attempts carried the credential.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct HeadServerOptions {
    /// Status line sent back, e.g. "302 Found".
    pub status: &'static str,
    /// `Location` header value, if any.
    pub location: Option<&'static str>,
    /// If true, requests carrying `Authorization` get 403 instead.
    pub reject_authorization: bool,
}

impl Default for HeadServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            location: None,
            reject_authorization: false,
        }
    }
}

pub struct HeadServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    seen_authorization: Arc<Mutex<Vec<Option<String>>>>,
}

impl HeadServer {
    /// `Authorization` values of every request received so far, in order.
    pub fn seen_authorization(&self) -> Vec<Option<String>> {
        self.seen_authorization.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(opts: HeadServerOptions) -> HeadServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let seen = Arc::clone(&seen_srv);
            thread::spawn(move || handle(stream, opts, &seen));
        }
    });
    HeadServer {
        url: format!("http://127.0.0.1:{}/", port),
        seen_authorization: seen,
    }
}

/// Returns a URL on a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    opts: HeadServerOptions,
    seen: &Mutex<Vec<Option<String>>>,
) {
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
    let authorization = header_value(request, "authorization");
    seen.lock().unwrap().push(authorization.clone());

    let response = if opts.reject_authorization && authorization.is_some() {
        "HTTP/1.1 403 Forbidden\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
    } else {
        let location = opts
            .location
            .map(|l| format!("Location: {}\r\n", l))
            .unwrap_or_default();
        format!(
            "HTTP/1.1 {}\r\nContent-Length: 0\r\n{}Connection: close\r\n\r\n",
            opts.status, location
        )
    };
    let _ = stream.write_all(response.as_bytes());
}

fn header_value(request: &str, name: &str) -> Option<String> {
    request.lines().skip(1).find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim()
            .eq_ignore_ascii_case(name)
            .then(|| v.trim().to_string())
    })
}
