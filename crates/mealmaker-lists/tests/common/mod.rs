// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Minimal HTTP/1.1 stub of the household list API, shared by the
//! integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

/// Bind an HTTP/1.1 mock server on a random loopback port.  It answers one
/// connection per scripted `(status, body)` pair, in order, and forwards
/// each captured request on the returned channel.
pub async fn mock_server(
    responses: Vec<(u16, String)>,
) -> (String, mpsc::UnboundedReceiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for (status, resp_body) in responses {
            let (stream, _) = listener.accept().await.expect("accept");
            let (read_half, mut write_half) = stream.into_split();
            let mut reader = BufReader::new(read_half);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).await.unwrap();
            let mut parts = request_line.trim().splitn(3, ' ');
            let method = parts.next().unwrap_or("").to_string();
            let path = parts.next().unwrap_or("").to_string();

            let mut headers = HashMap::new();
            let mut content_length: usize = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).await.unwrap();
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    break;
                }
                if let Some((k, v)) = trimmed.split_once(": ") {
                    let key = k.to_lowercase();
                    if key == "content-length" {
                        content_length = v.parse().unwrap_or(0);
                    }
                    headers.insert(key, v.to_string());
                }
            }

            let mut body_bytes = vec![0u8; content_length];
            reader.read_exact(&mut body_bytes).await.unwrap();
            let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

            let _ = tx.send(CapturedRequest { method, path, headers, body });

            let http_resp = format!(
                "HTTP/1.1 {status} OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                resp_body.len(),
                resp_body,
            );
            let _ = write_half.write_all(http_resp.as_bytes()).await;
        }
    });

    (format!("http://127.0.0.1:{port}"), rx)
}

pub fn reply(status: u16, body: &str) -> (u16, String) {
    (status, body.to_string())
}
