// src/core/net.rs
//
// Snapshot retrieval. URLs get one blocking GET with the transport defaults
// (no retry, no timeout override); anything else is read from disk.

use std::{fmt, fs, path::PathBuf};

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Where a snapshot's markup comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// `http://` / `https://` → URL; `file://` prefix or a bare path → file.
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        let lc = t.to_ascii_lowercase();
        if lc.starts_with("http://") || lc.starts_with("https://") {
            Source::Url(t.to_string())
        } else if lc.starts_with("file://") {
            Source::File(PathBuf::from(&t["file://".len()..]))
        } else {
            Source::File(PathBuf::from(t))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Raw markup bytes of one snapshot.
pub fn load(source: &Source) -> Result<Vec<u8>, FetchError> {
    match source {
        Source::Url(url) => fetch(url),
        Source::File(path) => fs::read(path).map_err(|source| FetchError::Read {
            path: path.clone(),
            source,
        }),
    }
}

/// One GET; any non-2xx status is an error carrying the status and URL.
pub fn fetch(url: &str) -> Result<Vec<u8>, FetchError> {
    let transport = |source| FetchError::Transport { url: url.to_string(), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(transport)?;

    let resp = client.get(url).send().map_err(transport)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
    }

    let body = resp.bytes().map_err(transport)?;
    debug!(url, status = status.as_u16(), bytes = body.len(), "fetched");
    Ok(body.to_vec())
}
