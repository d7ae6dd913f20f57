use bytes::Bytes;
use http::header::WARNING;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;

use crate::error::{GriddleError, Result};

/// Normalized result of one HTTP exchange.
///
/// Statuses above 299 are not errors at this layer; the transport hands the
/// response through unchanged and the caller decides via [`Response::is_error`].
/// The body is read lazily and at most once; call [`Response::buffer`] first
/// if it must be inspected without consuming it.
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: BodyState,
}

enum BodyState {
    /// Wire body, not yet read.
    Streaming(reqwest::Response),
    /// Materialized by [`Response::buffer`] or supplied up front; still
    /// readable once.
    Buffered(Bytes),
    Consumed,
}

impl Response {
    pub(crate) fn from_http(res: reqwest::Response) -> Self {
        Response {
            status: res.status(),
            headers: res.headers().clone(),
            body: BodyState::Streaming(res),
        }
    }

    /// Build a response from already materialized parts. Intended for
    /// transports that do not stream (mocks, record/replay fixtures).
    pub fn from_parts(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Response {
            status,
            headers,
            body: BodyState::Buffered(body.into()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// True when the status indicates failure (anything above 299).
    pub fn is_error(&self) -> bool {
        self.status.as_u16() > 299
    }

    /// Status rendered as e.g. "404 Not Found".
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Deprecation warnings reported by the service in `Warning` headers.
    pub fn warnings(&self) -> Vec<String> {
        self.headers
            .get_all(WARNING)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_owned)
            .collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings().is_empty()
    }

    /// Read the body to completion, consuming it. Reading a second time
    /// fails with [`GriddleError::BodyConsumed`].
    pub async fn bytes(&mut self) -> Result<Bytes> {
        match std::mem::replace(&mut self.body, BodyState::Consumed) {
            BodyState::Streaming(res) => Ok(res.bytes().await?),
            BodyState::Buffered(bytes) => Ok(bytes),
            BodyState::Consumed => Err(GriddleError::BodyConsumed),
        }
    }

    /// Decode the body as JSON, consuming it.
    pub async fn json<T: DeserializeOwned>(&mut self) -> Result<T> {
        let bytes = self.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Materialize the body in memory without consuming it; subsequent reads
    /// are served from the buffer. Idempotent, and a no-op once consumed.
    pub async fn buffer(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.body, BodyState::Consumed) {
            BodyState::Streaming(res) => self.body = BodyState::Buffered(res.bytes().await?),
            other => self.body = other,
        }
        Ok(())
    }

    /// Render status and body for diagnostics, e.g. `[200 OK] {"name":"es"}`.
    ///
    /// Buffers the body, so repeated calls yield identical output and the
    /// body stays readable afterwards.
    pub async fn debug_dump(&mut self) -> String {
        let mut out = format!("[{}]", self.status_line());

        match self.buffer().await {
            Err(e) => {
                out.push_str(&format!(" <error reading response body: {}>", e));
            }
            Ok(()) => {
                if let BodyState::Buffered(ref bytes) = self.body {
                    if !bytes.is_empty() {
                        out.push(' ');
                        out.push_str(&String::from_utf8_lossy(bytes));
                    }
                }
            }
        }

        out
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
