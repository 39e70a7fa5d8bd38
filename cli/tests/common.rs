//! # Magnum CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`:
//! - `magnum_cmd()` builds an `assert_cmd::Command` for the compiled binary
//! - `isolated_cmd()` additionally points HOME, the XDG config dir, and the
//!   working directory at a scratch directory so no real config file leaks in
//! - `serve_once()` answers exactly one HTTP request with a canned response
//!

// Different test crates use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};

/// Returns a `Command` for the `magnum` binary built for this test run.
pub fn magnum_cmd() -> Command {
    Command::cargo_bin("magnum").expect("Failed to find magnum binary for testing")
}

/// Returns a `Command` that cannot see the user's config files or endpoint
/// environment variables. `home` should be a temporary directory.
pub fn isolated_cmd(home: &Path) -> Command {
    std::fs::create_dir_all(home.join(".git")).expect("Failed to create .git marker");
    let mut cmd = magnum_cmd();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("MAGNUM_URL")
        .env_remove("OS_AUTH_TOKEN")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .env("NO_PROXY", "127.0.0.1");
    cmd
}

/// Starts a server on an ephemeral port that answers one request with
/// `status` and a JSON `body`, then exits.
///
/// Returns the base URL and a handle yielding the raw request head
/// (request line and headers).
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let url = format!("http://{}", listener.local_addr().expect("No local address"));
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept connection");
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        let head_end = loop {
            if let Some(pos) = head.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
            let n = stream.read(&mut buf).expect("Failed to read request");
            if n == 0 {
                break head.len();
            }
            head.extend_from_slice(&buf[..n]);
        };
        // Drain the body so closing the socket does not reset the connection.
        let body_len = String::from_utf8_lossy(&head[..head_end])
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while head.len() < head_end + body_len {
            let n = stream.read(&mut buf).expect("Failed to read request body");
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        head.truncate(head_end);
        stream
            .write_all(response.as_bytes())
            .expect("Failed to write response");
        String::from_utf8_lossy(&head).into_owned()
    });

    (url, handle)
}
