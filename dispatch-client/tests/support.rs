//! In-process HTTP server used by transport tests.
//!
//! The server answers each accepted connection with the next queued
//! [`Reply`] (the last one repeats) and records the parsed requests, so tests
//! can count attempts and inspect headers without a real backend.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

/// How the server answers one connection.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Read the request and answer `200 OK` with this body.
    Body(&'static str),
    /// Read the request and answer with a status code and body.
    Status(u16, &'static str),
    /// Read the request, answer `200 OK` announcing `length` body bytes, send
    /// only the given prefix and close.
    Truncated(usize, &'static str),
    /// Close the connection without reading or answering.
    Hangup,
    /// Read the request, then hold the connection open without answering.
    Stall(Duration),
}

/// A request as seen by the server.
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    /// Value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Handle to a running stub server.
pub struct StubServer {
    addr: SocketAddr,
    connections: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    /// Bind to an ephemeral local port and serve `replies` in order.
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .unwrap_or_else(|err| panic!("failed to bind stub server: {err}"));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|err| panic!("failed to read stub server address: {err}"));
        let connections = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let accepted = Arc::clone(&connections);
        let captured = Arc::clone(&requests);
        thread::spawn(move || {
            for (index, stream) in listener.incoming().enumerate() {
                let Ok(stream) = stream else { continue };
                accepted.fetch_add(1, Ordering::SeqCst);
                let reply = replies
                    .get(index)
                    .or_else(|| replies.last())
                    .cloned()
                    .unwrap_or(Reply::Hangup);
                let captured = Arc::clone(&captured);
                thread::spawn(move || serve(stream, reply, &captured));
            }
        });

        Self {
            addr,
            connections,
            requests,
        }
    }

    /// Base URL to configure the transport with.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of connections accepted so far.
    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    /// Requests fully read so far.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn serve(stream: TcpStream, reply: Reply, captured: &Mutex<Vec<CapturedRequest>>) {
    if matches!(reply, Reply::Hangup) {
        drop(stream);
        return;
    }
    let Ok(request) = read_request(&stream) else {
        return;
    };
    captured
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(request);
    let _ = match reply {
        Reply::Body(body) => write_response(&stream, 200, body),
        Reply::Status(status, body) => write_response(&stream, status, body),
        Reply::Truncated(length, prefix) => write_truncated(&stream, length, prefix),
        Reply::Stall(duration) => {
            thread::sleep(duration);
            Ok(())
        }
        Reply::Hangup => Ok(()),
    };
}

fn read_request(stream: &TcpStream) -> io::Result<CapturedRequest> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_owned();
    let path = parts.next().unwrap_or_default().to_owned();

    let mut headers = Vec::new();
    loop {
        line.clear();
        reader.read_line(&mut line)?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((name, value)) = trimmed.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_owned()));
        }
    }

    let length = headers
        .iter()
        .find(|(name, _)| name == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body)?;

    Ok(CapturedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn write_truncated(mut stream: &TcpStream, length: usize, prefix: &str) -> io::Result<()> {
    write!(
        stream,
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {length}\r\nConnection: close\r\n\r\n{prefix}"
    )?;
    stream.flush()?;
    stream.shutdown(std::net::Shutdown::Both)
}

fn write_response(mut stream: &TcpStream, status: u16, body: &str) -> io::Result<()> {
    let reason = match status {
        200 => "OK",
        502 => "Bad Gateway",
        _ => "Error",
    };
    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )?;
    stream.flush()
}
