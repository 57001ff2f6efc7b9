// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub data: DataSource,
    pub notes: NotesBackend,
}

/// Where the member dataset is read from. Read exactly once per session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http { host: String, port: u16, path: String },
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DATA_FILE))
    }
}

impl DataSource {
    /// Accepts a plain path or an `http://host[:port]/path` URL.
    pub fn parse(text: &str) -> Result<Self, String> {
        let s = text.trim();
        if s.is_empty() {
            return Err(s!("Empty data source"));
        }
        let Some(rest) = s.strip_prefix("http://") else {
            if s.starts_with("https://") {
                return Err(format!("TLS is not supported: {}", s));
            }
            return Ok(DataSource::File(PathBuf::from(s)));
        };

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port: u16 = p.parse().map_err(|_| format!("Invalid port: {}", p))?;
                (h, port)
            }
            None => (authority, HTTP_PORT),
        };
        if host.is_empty() {
            return Err(format!("Missing host: {}", s));
        }
        Ok(DataSource::Http { host: s!(host), port, path: s!(path) })
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::File(p) => p.display().to_string(),
            DataSource::Http { host, port, path } => format!("http://{}:{}{}", host, port, path),
        }
    }
}

/// Backing storage for notes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotesBackend {
    /// JSON object file, survives restarts.
    File(PathBuf),
    /// Process-lifetime only.
    Memory,
}

impl Default for NotesBackend {
    fn default() -> Self {
        NotesBackend::File(PathBuf::from(STORE_DIR).join(NOTES_FILE))
    }
}
