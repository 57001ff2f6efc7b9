// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). HTTP/1.0 so the server closes the
// connection at the end and there is no chunked transfer to undo.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::dataset::LoadError;

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, LoadError> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    split_response(&buf)
}

/// Check the status line and return the body.
pub(crate) fn split_response(raw: &[u8]) -> Result<String, LoadError> {
    let resp = String::from_utf8_lossy(raw);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    let code = status_line.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(LoadError::Http { status: s!(status_line) });
    }
    let body_idx = resp.find("\r\n\r\n").ok_or(LoadError::MalformedResponse)? + 4;
    Ok(resp[body_idx..].to_string())
}
